//! Intermediate Document Format (IDF)
//!
//! The in-memory content model shared by both assemblers: an ordered list of
//! sections, each an ordered list of typed nodes. Nodes describe *what* is
//! shown; how it is measured and placed is decided per medium by the layout
//! primitives.

use thirdplane_style::{ColumnWidth, Margins, TextAlign, TextRole};

/// A complete document: metadata plus its sections in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub author: String,
    /// Branding text drawn in every page / slide footer.
    pub footer_label: String,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn node_count(&self) -> usize {
        self.sections.iter().map(|s| s.nodes.len()).sum()
    }
}

/// A top-level section. In print each section after the first starts on a
/// new page; on slides each section is one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Stable identifier, used in logs and error messages.
    pub id: String,
    pub nodes: Vec<Node>,
}

impl Section {
    pub fn new(id: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            nodes,
        }
    }

    /// Nodes that occupy a slot on a slide, in order.
    pub fn slide_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_slide_visible())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Vertical whitespace in points. Print only.
    Spacer(f32),
    Image(ImageNode),
    Text(StyledText),
    SectionHeader(String),
    SubHeader(String),
    Paragraph(String),
    Bullets(Vec<String>),
    Quote(Quote),
    Divider,
    Grid(ComparisonGrid),
    Table(LabeledTable),
    Cards(CardGrid),
}

impl Node {
    pub fn is_slide_visible(&self) -> bool {
        !matches!(self, Node::Spacer(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Spacer(_) => "spacer",
            Node::Image(_) => "image",
            Node::Text(_) => "text",
            Node::SectionHeader(_) => "section-header",
            Node::SubHeader(_) => "sub-header",
            Node::Paragraph(_) => "paragraph",
            Node::Bullets(_) => "bullets",
            Node::Quote(_) => "quote",
            Node::Divider => "divider",
            Node::Grid(_) => "grid",
            Node::Table(_) => "table",
            Node::Cards(_) => "cards",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    /// Asset key of the image (see the resource crate's asset bundle).
    pub src: String,
    /// Print width in points; height follows the image's aspect ratio.
    pub width: f32,
}

/// Free text with an explicit role, used for the cover and the closing
/// call-to-action.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub role: TextRole,
    pub align: Option<TextAlign>,
    pub margin: Margins,
    pub opacity: f32,
}

impl StyledText {
    pub fn new(role: TextRole, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role,
            align: None,
            margin: Margins::default(),
            opacity: 1.0,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn margin(mut self, margin: Margins) -> Self {
        self.margin = margin;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub text: String,
    pub attribution: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, attribution: Option<&str>) -> Self {
        Self {
            text: text.into(),
            attribution: attribution.map(str::to_string),
        }
    }

    /// The quote wrapped in typographic quotation marks.
    pub fn display_text(&self) -> String {
        format!("\u{201c}{}\u{201d}", self.text)
    }

    /// An em dash followed by the name, when an attribution exists.
    pub fn attribution_line(&self) -> Option<String> {
        self.attribution
            .as_deref()
            .map(|name| format!("\u{2014} {}", name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub heading: String,
    pub body: String,
}

impl GridCell {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// `(heading, body)` cells in row-major order; the column count is the number
/// of declared widths, or one `*` column when none are declared.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonGrid {
    pub widths: Vec<ColumnWidth>,
    pub heading_align: TextAlign,
    pub cells: Vec<GridCell>,
}

impl ComparisonGrid {
    pub fn columns(&self) -> usize {
        self.widths.len().max(1)
    }

    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(self.columns())
    }

    /// Declared widths, with a single `*` column standing in for none.
    pub fn column_widths(&self) -> Vec<ColumnWidth> {
        if self.widths.is_empty() {
            vec![ColumnWidth::Star; self.columns()]
        } else {
            self.widths.clone()
        }
    }

    /// Cells of each grid row; the last row may be short.
    pub fn row_chunks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.columns())
    }

    /// Grid position `(row, column)` of the cell at `index`.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.columns(), index % self.columns())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRow {
    pub label: String,
    pub body: String,
}

impl LabeledRow {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowLayout {
    /// Label cell of the given width percentage beside the body cell.
    Beside { label_percent: f32 },
    /// Label above body in a single column.
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTint {
    Uniform,
    /// Even rows (0, 2, ...) tinted.
    Alternating,
}

impl RowTint {
    pub fn is_tinted(self, row: usize) -> bool {
        match self {
            RowTint::Uniform => true,
            RowTint::Alternating => row % 2 == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledTable {
    pub layout: RowLayout,
    pub tint: RowTint,
    pub rows: Vec<LabeledRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardGrid {
    pub columns: usize,
    pub align: TextAlign,
    /// Gap between cards in points (print).
    pub gap: f32,
    pub cards: Vec<Card>,
}

impl CardGrid {
    pub fn rows(&self) -> usize {
        self.cards.len().div_ceil(self.columns.max(1))
    }
}
