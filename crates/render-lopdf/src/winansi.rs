//! WinAnsiEncoding (Windows-1252) for PDF text strings.

/// Code points 0x80..=0x9F; `None` marks the five undefined codes.
const HIGH_CONTROL: [Option<char>; 32] = [
    Some('\u{20ac}'),
    None,
    Some('\u{201a}'),
    Some('\u{0192}'),
    Some('\u{201e}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02c6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017d}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201c}'),
    Some('\u{201d}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02dc}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203a}'),
    Some('\u{0153}'),
    None,
    Some('\u{017e}'),
    Some('\u{0178}'),
];

pub fn encode_char(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7e | 0xa0..=0xff => Some(c as u8),
        _ => HIGH_CONTROL
            .iter()
            .position(|m| *m == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

pub fn decode_byte(code: u8) -> Option<char> {
    match code {
        0x20..=0x7e | 0xa0..=0xff => Some(code as char),
        0x80..=0x9f => HIGH_CONTROL[(code - 0x80) as usize],
        _ => None,
    }
}

/// Encodes `text`, replacing characters WinAnsi cannot represent with `?`.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            encode_char(c).unwrap_or_else(|| {
                log::warn!("Character {:?} (U+{:04X}) has no WinAnsi code", c, c as u32);
                b'?'
            })
        })
        .collect()
}

pub fn decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| decode_byte(*b).unwrap_or('\u{fffd}'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typographic_punctuation_maps_to_high_codes() {
        assert_eq!(encode("\u{201c}Work\u{201d}"), b"\x93Work\x94".to_vec());
        assert_eq!(encode("12\u{2013}14 \u{2014} \u{2022}"), b"12\x9614 \x97 \x95".to_vec());
        assert_eq!(encode("caf\u{e9}"), b"caf\xe9".to_vec());
    }

    #[test]
    fn unknown_characters_become_question_marks() {
        assert_eq!(encode("\u{2192}"), b"?".to_vec());
        assert_eq!(encode_char('\u{81}'), None);
    }

    #[test]
    fn decoding_reverses_encoding() {
        let text = "Ages 12\u{2013}14 \u{2026} \u{2018}valorization\u{2019}";
        assert_eq!(decode(&encode(text)), text);
        assert_eq!(decode_byte(0x81), None);
    }
}
