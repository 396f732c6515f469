use serde::{Deserialize, Serialize};
use std::fmt;

/// The two typographic roles of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontRole {
    /// Serif face for titles, headings and quotes.
    Display,
    /// Sans face for running text.
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontVariant {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontVariant {
    pub const ALL: [FontVariant; 4] = [
        FontVariant::Normal,
        FontVariant::Bold,
        FontVariant::Italic,
        FontVariant::BoldItalic,
    ];

    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontVariant::Normal,
            (true, false) => FontVariant::Bold,
            (false, true) => FontVariant::Italic,
            (true, true) => FontVariant::BoldItalic,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, FontVariant::Bold | FontVariant::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontVariant::Italic | FontVariant::BoldItalic)
    }

    /// The next variant to try when this one has no file.
    fn fallback(self) -> Option<FontVariant> {
        match self {
            FontVariant::Normal => None,
            FontVariant::Bold => Some(FontVariant::Normal),
            FontVariant::Italic => Some(FontVariant::Normal),
            FontVariant::BoldItalic => Some(FontVariant::Italic),
        }
    }
}

/// A role plus the requested variant. This is what layout elements carry;
/// which file ends up drawing it is decided by the role's [`FontFamily`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontKey {
    pub role: FontRole,
    pub variant: FontVariant,
}

impl FontKey {
    pub const fn new(role: FontRole, variant: FontVariant) -> Self {
        Self { role, variant }
    }

    pub const fn regular(role: FontRole) -> Self {
        Self::new(role, FontVariant::Normal)
    }

    pub fn with_variant(self, variant: FontVariant) -> Self {
        Self { variant, ..self }
    }
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.role, self.variant)
    }
}

/// Font files bound to one role. Only `normal` is mandatory; missing
/// variants fall back (bold to normal, bold-italic to italic, italic to
/// normal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    /// Family name as written into the slide deck (`latin typeface`).
    pub name: String,
    pub normal: String,
    #[serde(default)]
    pub bold: Option<String>,
    #[serde(default)]
    pub italic: Option<String>,
    #[serde(default)]
    pub bold_italic: Option<String>,
}

impl FontFamily {
    pub fn new(name: impl Into<String>, normal: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            normal: normal.into(),
            bold: None,
            italic: None,
            bold_italic: None,
        }
    }

    pub fn with_bold(mut self, file: impl Into<String>) -> Self {
        self.bold = Some(file.into());
        self
    }

    pub fn with_italic(mut self, file: impl Into<String>) -> Self {
        self.italic = Some(file.into());
        self
    }

    pub fn with_bold_italic(mut self, file: impl Into<String>) -> Self {
        self.bold_italic = Some(file.into());
        self
    }

    fn declared(&self, variant: FontVariant) -> Option<&str> {
        match variant {
            FontVariant::Normal => Some(self.normal.as_str()),
            FontVariant::Bold => self.bold.as_deref(),
            FontVariant::Italic => self.italic.as_deref(),
            FontVariant::BoldItalic => self.bold_italic.as_deref(),
        }
    }

    /// The file that draws `variant`, walking the fallback chain.
    pub fn file_for(&self, variant: FontVariant) -> &str {
        let mut current = variant;
        loop {
            if let Some(file) = self.declared(current) {
                return file;
            }
            match current.fallback() {
                Some(next) => current = next,
                None => return self.normal.as_str(),
            }
        }
    }

    /// Distinct files referenced by this family, in variant order.
    pub fn files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = Vec::new();
        for variant in FontVariant::ALL {
            let file = self.file_for(variant);
            if !files.contains(&file) {
                files.push(file);
            }
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variants_fall_back() {
        let family = FontFamily::new("Lora", "Lora-Regular.ttf").with_italic("Lora-Italic.ttf");
        assert_eq!(family.file_for(FontVariant::Bold), "Lora-Regular.ttf");
        assert_eq!(family.file_for(FontVariant::BoldItalic), "Lora-Italic.ttf");
        assert_eq!(family.file_for(FontVariant::Italic), "Lora-Italic.ttf");
    }

    #[test]
    fn italic_without_file_uses_normal() {
        let family = FontFamily::new("Inter", "Inter-Regular.ttf");
        for variant in FontVariant::ALL {
            assert_eq!(family.file_for(variant), "Inter-Regular.ttf");
        }
        assert_eq!(family.files(), vec!["Inter-Regular.ttf"]);
    }

    #[test]
    fn variant_flags_round_trip() {
        for variant in FontVariant::ALL {
            assert_eq!(
                FontVariant::from_flags(variant.is_bold(), variant.is_italic()),
                variant
            );
        }
    }
}
