use crate::font::FontKey;
use serde::{Deserialize, Serialize};
use thirdplane_types::Color;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Output medium. The palette and font bindings are shared; sizes differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medium {
    Print,
    Slides,
}

/// Semantic text roles used by the content model and the primitives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    CoverTitle,
    CoverSubtitle,
    SiteLink,
    SectionHeader,
    SubHeader,
    Body,
    ListItem,
    CellBody,
    GridHeading,
    RowLabel,
    CardTitle,
    FeatureTitle,
    Quote,
    Attribution,
    CalloutTitle,
    Fineprint,
    Footer,
    PageNumber,
}

/// A fully resolved text style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontKey,
    /// Font size in points.
    pub size: f32,
    pub color: Color,
    /// Line height as a multiple of the font's natural line height.
    pub line_height: f32,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn aligned(self, align: TextAlign) -> Self {
        Self { align, ..self }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}
