use crate::elements::PositionedElement;

/// What a block was built from. Used for logging and tests only; the
/// paginator treats all blocks alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Divider,
    SectionHeader,
    SubHeader,
    Paragraph,
    BulletList,
    Quote,
    Grid,
    Table,
    Cards,
    Image,
    Text,
    Spacer,
    Footer,
}

/// A slice of a block that must stay on one page. Element coordinates are
/// relative to the band's top-left corner, which sits at the left edge of
/// the content area.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Band {
    pub height: f32,
    pub elements: Vec<PositionedElement>,
}

impl Band {
    pub fn new(height: f32, elements: Vec<PositionedElement>) -> Self {
        Self { height, elements }
    }

    pub fn empty(height: f32) -> Self {
        Self::new(height, Vec::new())
    }
}

/// One laid-out visual unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub page_break_before: bool,
    pub space_before: f32,
    pub space_after: f32,
    pub bands: Vec<Band>,
}

impl Block {
    pub fn new(kind: BlockKind, bands: Vec<Band>) -> Self {
        Self {
            kind,
            page_break_before: false,
            space_before: 0.0,
            space_after: 0.0,
            bands,
        }
    }

    pub fn spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn with_page_break(mut self, page_break: bool) -> Self {
        self.page_break_before = page_break;
        self
    }

    pub fn content_height(&self) -> f32 {
        self.bands.iter().map(|b| b.height).sum()
    }

    /// Height including the vertical margins.
    pub fn outer_height(&self) -> f32 {
        self.space_before + self.content_height() + self.space_after
    }

    pub fn elements(&self) -> impl Iterator<Item = &PositionedElement> {
        self.bands.iter().flat_map(|b| b.elements.iter())
    }

    /// Text of every text element, in band order.
    pub fn texts(&self) -> Vec<&str> {
        self.elements()
            .filter_map(|e| e.as_text())
            .map(|t| t.content.as_str())
            .collect()
    }
}
