use crate::font::{FontFamily, FontKey, FontRole, FontVariant};
use crate::text::{Medium, TextAlign, TextRole, TextStyle};
use serde::{Deserialize, Serialize};
use thirdplane_types::Color;

/// Semantic color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteColor {
    Primary,
    Accent,
    Border,
    Background,
    Text,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Deep purple used for headings and the cover ribbon.
    pub primary: Color,
    /// Gold used for rules, bars and the site link.
    pub accent: Color,
    /// Light lavender used for table rules.
    pub border: Color,
    /// Cream page / slide background.
    pub background: Color,
    /// Earth-brown running text.
    pub text: Color,
    /// Pale lavender tint behind cards, quotes and header cells.
    pub highlight: Color,
}

impl Palette {
    pub fn montessori() -> Self {
        Self {
            primary: Color::rgb(0x3f, 0x26, 0x5b),
            accent: Color::rgb(0xc4, 0xa9, 0x4d),
            border: Color::rgb(0xe4, 0xd2, 0xf8),
            background: Color::rgb(0xfa, 0xf7, 0xf2),
            text: Color::rgb(0x5c, 0x4a, 0x3a),
            highlight: Color::rgb(0xf3, 0xeb, 0xfc),
        }
    }

    pub fn get(&self, name: PaletteColor) -> Color {
        match name {
            PaletteColor::Primary => self.primary,
            PaletteColor::Accent => self.accent,
            PaletteColor::Border => self.border,
            PaletteColor::Background => self.background,
            PaletteColor::Text => self.text,
            PaletteColor::Highlight => self.highlight,
        }
    }
}

/// The single visual theme. Built once and passed by reference to every
/// primitive and renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub palette: Palette,
    pub display: FontFamily,
    pub body: FontFamily,
}

impl Theme {
    pub fn montessori() -> Self {
        Self {
            palette: Palette::montessori(),
            display: FontFamily::new("Lora", "Lora-Regular.ttf")
                .with_bold("Lora-Regular.ttf")
                .with_italic("Lora-Italic.ttf")
                .with_bold_italic("Lora-Italic.ttf"),
            body: FontFamily::new("Inter", "Inter-Regular.ttf")
                .with_bold("Inter-Regular.ttf")
                .with_italic("Inter-Regular.ttf")
                .with_bold_italic("Inter-Regular.ttf"),
        }
    }

    pub fn family(&self, role: FontRole) -> &FontFamily {
        match role {
            FontRole::Display => &self.display,
            FontRole::Body => &self.body,
        }
    }

    pub fn color(&self, name: PaletteColor) -> Color {
        self.palette.get(name)
    }

    /// Asset file that draws `key`, after variant fallback.
    pub fn font_file(&self, key: FontKey) -> &str {
        self.family(key.role).file_for(key.variant)
    }

    pub fn text_style(&self, role: TextRole, medium: Medium) -> TextStyle {
        use FontRole::{Body, Display};
        use FontVariant::{Bold, Italic, Normal};
        use PaletteColor as C;
        use TextAlign::{Center, Left, Right};

        let (font_role, variant, size, color, line_height, align) = match medium {
            Medium::Print => match role {
                TextRole::CoverTitle => (Display, Normal, 28.0, C::Primary, 1.3, Center),
                TextRole::CoverSubtitle => (Body, Normal, 13.0, C::Text, 1.4, Center),
                TextRole::SiteLink => (Body, Normal, 11.0, C::Accent, 1.4, Center),
                TextRole::SectionHeader => (Display, Normal, 20.0, C::Primary, 1.2, Left),
                TextRole::SubHeader => (Display, Normal, 13.0, C::Primary, 1.2, Left),
                TextRole::Body | TextRole::ListItem | TextRole::CellBody => {
                    (Body, Normal, 10.0, C::Text, 1.5, Left)
                }
                TextRole::GridHeading => (Display, Normal, 11.0, C::Primary, 1.4, Left),
                TextRole::RowLabel => (Display, Normal, 10.0, C::Primary, 1.4, Left),
                TextRole::CardTitle => (Display, Normal, 11.0, C::Primary, 1.4, Left),
                TextRole::FeatureTitle => (Display, Normal, 12.0, C::Primary, 1.4, Center),
                TextRole::Quote => (Display, Italic, 11.0, C::Primary, 1.4, Center),
                TextRole::Attribution => (Body, Normal, 9.0, C::Accent, 1.4, Center),
                TextRole::CalloutTitle => (Display, Normal, 14.0, C::Primary, 1.4, Center),
                TextRole::Fineprint => (Body, Normal, 7.0, C::Text, 1.4, Center),
                TextRole::Footer => (Body, Normal, 8.0, C::Accent, 1.4, Left),
                TextRole::PageNumber => (Body, Normal, 8.0, C::Text, 1.4, Right),
            },
            Medium::Slides => match role {
                TextRole::CoverTitle => (Display, Bold, 36.0, C::Primary, 1.2, Center),
                TextRole::CoverSubtitle => (Body, Normal, 16.0, C::Text, 1.3, Center),
                TextRole::SiteLink => (Body, Normal, 14.0, C::Accent, 1.0, Center),
                TextRole::SectionHeader => (Display, Bold, 24.0, C::Primary, 1.0, Left),
                TextRole::SubHeader => (Display, Bold, 15.0, C::Primary, 1.0, Left),
                TextRole::Body => (Body, Normal, 11.0, C::Text, 1.3, Left),
                TextRole::ListItem => (Body, Normal, 10.0, C::Text, 1.3, Left),
                TextRole::CellBody => (Body, Normal, 10.0, C::Text, 1.2, Left),
                TextRole::GridHeading => (Display, Bold, 13.0, C::Primary, 1.0, Left),
                TextRole::RowLabel => (Display, Normal, 12.0, C::Primary, 1.0, Left),
                TextRole::CardTitle => (Display, Bold, 12.0, C::Primary, 1.0, Left),
                TextRole::FeatureTitle => (Display, Bold, 14.0, C::Primary, 1.0, Center),
                TextRole::Quote => (Display, Italic, 12.0, C::Primary, 1.0, Center),
                TextRole::Attribution => (Body, Normal, 10.0, C::Accent, 1.0, Center),
                TextRole::CalloutTitle => (Display, Bold, 16.0, C::Primary, 1.0, Center),
                TextRole::Fineprint => (Body, Normal, 7.0, C::Text, 1.0, Center),
                TextRole::Footer => (Body, Normal, 8.0, C::Accent, 1.0, Left),
                TextRole::PageNumber => (Body, Normal, 8.0, C::Text, 1.0, Right),
            },
        };

        TextStyle {
            font: FontKey::new(font_role, variant),
            size,
            color: self.palette.get(color),
            line_height,
            align,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::montessori()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_brand_colors() {
        let theme = Theme::montessori();
        assert_eq!(theme.color(PaletteColor::Primary).to_hex(), "3F265B");
        assert_eq!(theme.color(PaletteColor::Accent).to_hex(), "C4A94D");
        assert_eq!(theme.color(PaletteColor::Border).to_hex(), "E4D2F8");
        assert_eq!(theme.color(PaletteColor::Background).to_hex(), "FAF7F2");
        assert_eq!(theme.color(PaletteColor::Text).to_hex(), "5C4A3A");
        assert_eq!(theme.color(PaletteColor::Highlight).to_hex(), "F3EBFC");
    }

    #[test]
    fn display_role_binds_regular_and_italic_files() {
        let theme = Theme::montessori();
        let file = |variant| theme.font_file(FontKey::new(FontRole::Display, variant));
        assert_eq!(file(FontVariant::Normal), "Lora-Regular.ttf");
        assert_eq!(file(FontVariant::Bold), "Lora-Regular.ttf");
        assert_eq!(file(FontVariant::Italic), "Lora-Italic.ttf");
        assert_eq!(file(FontVariant::BoldItalic), "Lora-Italic.ttf");
        assert_eq!(theme.body.files(), vec!["Inter-Regular.ttf"]);
    }

    #[test]
    fn print_and_slide_scales_differ_only_in_size() {
        let theme = Theme::montessori();
        let print = theme.text_style(TextRole::SectionHeader, Medium::Print);
        let slides = theme.text_style(TextRole::SectionHeader, Medium::Slides);
        assert_eq!(print.size, 20.0);
        assert_eq!(slides.size, 24.0);
        assert_eq!(print.color, slides.color);
        assert_eq!(print.font.role, slides.font.role);
        assert!(slides.font.variant.is_bold());
    }

    #[test]
    fn quote_text_is_italic_and_centered() {
        let style = Theme::montessori().text_style(TextRole::Quote, Medium::Print);
        assert_eq!(style.font, FontKey::new(FontRole::Display, FontVariant::Italic));
        assert_eq!(style.align, TextAlign::Center);
        assert_eq!(style.size, 11.0);
    }

    #[test]
    fn theme_deserializes_from_json() {
        let json = serde_json::to_string(&Theme::montessori()).unwrap();
        let theme: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, Theme::montessori());
    }
}
