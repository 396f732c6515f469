//! Font faces and the role-to-face bindings used for measuring text.
//!
//! A [`FontLibrary`] resolves every [`FontKey`] of the theme to one
//! [`FontFace`]. Faces are shared when several variants fall back to the same
//! file, so the renderer embeds each file exactly once.

use crate::LayoutError;
use crate::standard_metrics;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thirdplane_resource::{AssetBundle, SharedResourceData};
use thirdplane_style::{FontKey, FontRole, FontVariant, Theme};

/// Base-14 faces available without font files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    TimesRoman,
    TimesItalic,
}

impl StandardFont {
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesItalic => "Times-Italic",
        }
    }

    fn is_serif(self) -> bool {
        !matches!(self, StandardFont::Helvetica)
    }
}

#[derive(Clone)]
pub enum FaceSource {
    TrueType(SharedResourceData),
    Standard(StandardFont),
}

impl fmt::Debug for FaceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceSource::TrueType(data) => f
                .debug_struct("TrueType")
                .field("data_len", &data.len())
                .finish(),
            FaceSource::Standard(font) => f.debug_tuple("Standard").field(font).finish(),
        }
    }
}

/// Advance used for characters the face has no glyph for, in 1/1000 em.
const MISSING_ADVANCE: f32 = 500.0;

/// One font file (or standard face) with the metrics layout needs.
///
/// TrueType advances are read once, when the file is parsed.
#[derive(Clone)]
pub struct FontFace {
    name: String,
    source: FaceSource,
    advances: Arc<HashMap<char, f32>>,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    line_gap: i16,
}

impl FontFace {
    /// Parses a TrueType file. `file` is only used for naming and errors.
    pub fn from_truetype(file: &str, data: SharedResourceData) -> Result<Self, LayoutError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|e| LayoutError::InvalidFont {
            file: file.to_string(),
            message: e.to_string(),
        })?;

        let name = face
            .names()
            .into_iter()
            .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .find_map(|n| n.to_string())
            .unwrap_or_else(|| file.trim_end_matches(".ttf").to_string());
        let name: String = name
            .chars()
            .filter(|c| c.is_ascii_graphic() && !"()<>[]{}/%#".contains(*c))
            .collect();

        let (units_per_em, ascender, descender, line_gap) = (
            face.units_per_em(),
            face.ascender(),
            face.descender(),
            face.line_gap(),
        );
        let advances = unicode_advances(&face);
        log::debug!(
            "Parsed font '{}' as {} ({} units/em, {} mapped chars)",
            file,
            name,
            units_per_em,
            advances.len()
        );

        Ok(Self {
            name,
            source: FaceSource::TrueType(data),
            advances: Arc::new(advances),
            units_per_em,
            ascender,
            descender,
            line_gap,
        })
    }

    pub fn standard(font: StandardFont) -> Self {
        // Vertical metrics of the common metric-compatible TrueType clones.
        let (ascender, descender, line_gap) = if font.is_serif() {
            (891, -216, 42)
        } else {
            (905, -212, 33)
        };
        Self {
            name: font.base_font().to_string(),
            source: FaceSource::Standard(font),
            advances: Arc::default(),
            units_per_em: 1000,
            ascender,
            descender,
            line_gap,
        }
    }

    /// PostScript name, safe to use as a PDF `BaseFont`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &FaceSource {
        &self.source
    }

    /// Advance width of `c` in 1/1000 em.
    pub fn advance_per_mille(&self, c: char) -> f32 {
        match &self.source {
            FaceSource::Standard(font) => standard_metrics::advance(font.is_serif(), c) as f32,
            FaceSource::TrueType(_) => self.advances.get(&c).copied().unwrap_or(MISSING_ADVANCE),
        }
    }

    /// Width of `text` set at `size` points.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let per_mille: f32 = text.chars().map(|c| self.advance_per_mille(c)).sum();
        per_mille * size / 1000.0
    }

    pub fn ascent(&self, size: f32) -> f32 {
        self.ascender as f32 / self.units_per_em as f32 * size
    }

    /// Depth below the baseline, as a positive number.
    pub fn descent(&self, size: f32) -> f32 {
        -(self.descender as f32) / self.units_per_em as f32 * size
    }

    /// Ascent plus descent plus line gap.
    pub fn natural_line_height(&self, size: f32) -> f32 {
        (self.ascender as f32 - self.descender as f32 + self.line_gap as f32)
            / self.units_per_em as f32
            * size
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("advances", &self.advances.len())
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

/// Per-mille advance of every char the face's Unicode cmaps map to a glyph.
fn unicode_advances(face: &ttf_parser::Face<'_>) -> HashMap<char, f32> {
    let scale = 1000.0 / face.units_per_em().max(1) as f32;
    let mut advances = HashMap::new();
    let Some(cmap) = face.tables().cmap else {
        return advances;
    };
    for subtable in cmap.subtables {
        if !subtable.is_unicode() {
            continue;
        }
        subtable.codepoints(|code| {
            if let Some(c) = char::from_u32(code)
                && let Some(advance) = face.glyph_index(c).and_then(|g| face.glyph_hor_advance(g))
            {
                advances.entry(c).or_insert(advance as f32 * scale);
            }
        });
    }
    advances
}

const KEYS: usize = 8;

fn slot(key: FontKey) -> usize {
    let role = match key.role {
        FontRole::Display => 0,
        FontRole::Body => 1,
    };
    let variant = match key.variant {
        FontVariant::Normal => 0,
        FontVariant::Bold => 1,
        FontVariant::Italic => 2,
        FontVariant::BoldItalic => 3,
    };
    role * 4 + variant
}

/// Every font key of the theme bound to a face.
#[derive(Debug, Clone)]
pub struct FontLibrary {
    faces: Vec<Arc<FontFace>>,
    bindings: [usize; KEYS],
}

impl FontLibrary {
    /// Parses the theme's TrueType files out of the asset bundle.
    pub fn from_assets(theme: &Theme, assets: &AssetBundle) -> Result<Self, LayoutError> {
        let mut files: Vec<&str> = Vec::new();
        let mut faces = Vec::new();
        let mut bindings = [0; KEYS];

        for role in [FontRole::Display, FontRole::Body] {
            for variant in FontVariant::ALL {
                let key = FontKey::new(role, variant);
                let file = theme.font_file(key);
                let index = match files.iter().position(|f| *f == file) {
                    Some(index) => index,
                    None => {
                        let data = assets
                            .font(file)
                            .ok_or_else(|| LayoutError::MissingFont(file.to_string()))?;
                        faces.push(Arc::new(FontFace::from_truetype(file, data.clone())?));
                        files.push(file);
                        faces.len() - 1
                    }
                };
                bindings[slot(key)] = index;
            }
        }

        Ok(Self { faces, bindings })
    }

    /// Standard faces: Times for the display role (italic variants use
    /// Times-Italic), Helvetica for the body role.
    pub fn standard() -> Self {
        let faces = vec![
            Arc::new(FontFace::standard(StandardFont::TimesRoman)),
            Arc::new(FontFace::standard(StandardFont::TimesItalic)),
            Arc::new(FontFace::standard(StandardFont::Helvetica)),
        ];
        let mut bindings = [0; KEYS];
        for role in [FontRole::Display, FontRole::Body] {
            for variant in FontVariant::ALL {
                let key = FontKey::new(role, variant);
                bindings[slot(key)] = match (role, variant.is_italic()) {
                    (FontRole::Display, false) => 0,
                    (FontRole::Display, true) => 1,
                    (FontRole::Body, _) => 2,
                };
            }
        }
        Self { faces, bindings }
    }

    pub fn face(&self, key: FontKey) -> &FontFace {
        &self.faces[self.bindings[slot(key)]]
    }

    /// Index of the face drawing `key` within [`faces`](Self::faces).
    pub fn face_index(&self, key: FontKey) -> usize {
        self.bindings[slot(key)]
    }

    /// Distinct faces, in first-use order.
    pub fn faces(&self) -> &[Arc<FontFace>] {
        &self.faces
    }
}
