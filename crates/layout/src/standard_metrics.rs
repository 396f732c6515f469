//! Advance widths of the base-14 faces used when no TrueType files are
//! available, in 1/1000 em. Indexed by `char - ' '` for printable ASCII.

const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // digits
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

/// Width of `c` from an ASCII table, with the typographic punctuation the
/// content uses and a face-specific default for everything else.
pub(crate) fn advance(serif: bool, c: char) -> u16 {
    let table = if serif { &TIMES_ROMAN } else { &HELVETICA };
    match c {
        ' '..='~' => table[c as usize - ' ' as usize],
        '\u{00a0}' => table[0],
        '\u{2013}' => if serif { 500 } else { 556 },
        '\u{2014}' | '\u{2026}' => 1000,
        '\u{2018}' | '\u{2019}' => if serif { 333 } else { 222 },
        '\u{201c}' | '\u{201d}' => if serif { 444 } else { 333 },
        '\u{2022}' => 350,
        _ => if serif { 500 } else { 556 },
    }
}
