//! Greedy line breaking.
//!
//! Lines break at spaces; `\n` forces a break; a word wider than the line is
//! split between characters. Empty input yields a single empty line so every
//! text keeps a line box.

use crate::fonts::FontFace;

const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f32,
}

struct LineBuilder<'a> {
    face: &'a FontFace,
    size: f32,
    max_width: f32,
    lines: Vec<TextLine>,
    current: String,
    width: f32,
}

impl<'a> LineBuilder<'a> {
    fn flush(&mut self) {
        let text = std::mem::take(&mut self.current);
        self.lines.push(TextLine {
            text,
            width: self.width,
        });
        self.width = 0.0;
    }

    fn push_word(&mut self, word: &str) {
        let word_width = self.face.text_width(word, self.size);
        if !self.current.is_empty() {
            let space = self.face.text_width(" ", self.size);
            if self.width + space + word_width <= self.max_width + EPSILON {
                self.current.push(' ');
                self.current.push_str(word);
                self.width += space + word_width;
                return;
            }
            self.flush();
        }

        if word_width <= self.max_width + EPSILON {
            self.current.push_str(word);
            self.width = word_width;
        } else {
            self.push_broken_word(word);
        }
    }

    /// Splits an overlong word; the tail stays open for following words.
    fn push_broken_word(&mut self, word: &str) {
        for c in word.chars() {
            let advance = self.face.advance_per_mille(c) * self.size / 1000.0;
            if !self.current.is_empty() && self.width + advance > self.max_width + EPSILON {
                self.flush();
            }
            self.current.push(c);
            self.width += advance;
        }
    }
}

pub fn wrap_text(text: &str, face: &FontFace, size: f32, max_width: f32) -> Vec<TextLine> {
    let mut builder = LineBuilder {
        face,
        size,
        max_width: max_width.max(0.0),
        lines: Vec::new(),
        current: String::new(),
        width: 0.0,
    };

    for paragraph in text.split('\n') {
        for word in paragraph
            .trim_end_matches('\r')
            .split(' ')
            .filter(|w| !w.is_empty())
        {
            builder.push_word(word);
        }
        builder.flush();
    }

    builder.lines
}
