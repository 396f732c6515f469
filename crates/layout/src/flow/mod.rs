//! Flow primitives for the print pipeline.
//!
//! Every primitive turns one content node into a [`Block`]. Blocks know
//! nothing about pages: their bands are laid out against the content width
//! only, and [`crate::paginate`] decides where they land.

mod grids;
mod primitives;
mod table;

pub use table::{CellText, Rule, TableCell, TableRules, TableSpec, VerticalRules};

use crate::block::{Band, Block};
use crate::elements::{LayoutElement, PositionedElement, TextElement};
use crate::fonts::FontLibrary;
use crate::images::ImageCatalog;
use crate::text::wrap_text;
use crate::LayoutError;
use thirdplane_idf::Node;
use thirdplane_style::{Medium, TextAlign, TextRole, TextStyle, Theme};

/// Everything a flow primitive needs: theme, measured fonts, image sizes and
/// the width it lays out against.
#[derive(Debug, Clone, Copy)]
pub struct FlowContext<'a> {
    pub theme: &'a Theme,
    pub fonts: &'a FontLibrary,
    pub images: &'a ImageCatalog,
    pub width: f32,
}

impl<'a> FlowContext<'a> {
    pub fn new(
        theme: &'a Theme,
        fonts: &'a FontLibrary,
        images: &'a ImageCatalog,
        width: f32,
    ) -> Self {
        Self {
            theme,
            fonts,
            images,
            width,
        }
    }

    pub fn style(&self, role: TextRole) -> TextStyle {
        self.theme.text_style(role, Medium::Print)
    }

    /// Height of one line set in `style`.
    pub fn line_height(&self, style: &TextStyle) -> f32 {
        self.fonts.face(style.font).natural_line_height(style.size) * style.line_height
    }

    /// Wraps `text` into one band per line, aligned within `[x, x + width]`.
    pub fn text_bands(
        &self,
        text: &str,
        style: &TextStyle,
        x: f32,
        width: f32,
        opacity: f32,
    ) -> Vec<Band> {
        let face = self.fonts.face(style.font);
        let natural = face.natural_line_height(style.size);
        let line_height = natural * style.line_height;
        let baseline = (line_height - natural) / 2.0 + face.ascent(style.size);

        wrap_text(text, face, style.size, width)
            .into_iter()
            .map(|line| {
                if line.text.is_empty() {
                    return Band::empty(line_height);
                }
                let offset = match style.align {
                    TextAlign::Left => 0.0,
                    TextAlign::Center => (width - line.width) / 2.0,
                    TextAlign::Right => width - line.width,
                }
                .max(0.0);
                Band::new(
                    line_height,
                    vec![PositionedElement {
                        x: x + offset,
                        y: 0.0,
                        width: line.width,
                        height: line_height,
                        element: LayoutElement::Text(TextElement {
                            content: line.text,
                            font: style.font,
                            size: style.size,
                            color: style.color,
                            baseline,
                            opacity,
                        }),
                    }],
                )
            })
            .collect()
    }

    /// Stacks text items vertically inside a box of the given width.
    /// Returns the stack height and its elements relative to the box.
    pub fn stack(&self, items: &[CellText], width: f32) -> (f32, Vec<PositionedElement>) {
        let mut y = 0.0;
        let mut elements = Vec::new();
        for item in items {
            y += item.margin.top;
            let inner = (width - item.margin.horizontal()).max(0.0);
            for band in self.text_bands(&item.text, &item.style, item.margin.left, inner, 1.0) {
                elements.extend(band.elements.into_iter().map(|e| e.translate(0.0, y)));
                y += band.height;
            }
            y += item.margin.bottom;
        }
        (y, elements)
    }

    /// Lays out a single content node.
    pub fn layout_node(&self, node: &Node) -> Result<Block, LayoutError> {
        let block = match node {
            Node::Spacer(height) => self.spacer(*height),
            Node::Image(image) => self.image(&image.src, image.width)?,
            Node::Text(text) => self.styled_text(text),
            Node::SectionHeader(text) => self.section_header(text),
            Node::SubHeader(text) => self.sub_header(text),
            Node::Paragraph(text) => self.paragraph(text),
            Node::Bullets(items) => self.bullet_list(items),
            Node::Quote(quote) => self.quote(quote),
            Node::Divider => self.divider(),
            Node::Grid(grid) => self.comparison_grid(grid),
            Node::Table(table) => self.labeled_table(table),
            Node::Cards(cards) => self.card_grid(cards),
        };
        log::debug!(
            "Laid out {} as {} band(s), {:.1}pt",
            node.kind_name(),
            block.bands.len(),
            block.outer_height()
        );
        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Fixture;
    use thirdplane_style::{TextAlign, TextRole};

    #[test]
    fn centered_lines_are_centered() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let style = ctx.style(TextRole::CoverTitle);
        let bands = ctx.text_bands("Montessori for\nAdolescents 101", &style, 0.0, 512.0, 1.0);
        assert_eq!(bands.len(), 2);
        for band in &bands {
            let el = &band.elements[0];
            let left = el.x;
            let right = 512.0 - (el.x + el.width);
            assert!((left - right).abs() < 0.01);
        }
    }

    #[test]
    fn right_aligned_lines_end_at_the_edge() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let style = ctx.style(TextRole::Body).aligned(TextAlign::Right);
        let bands = ctx.text_bands("3 / 6", &style, 10.0, 100.0, 1.0);
        let el = &bands[0].elements[0];
        assert!((el.x + el.width - 110.0).abs() < 0.01);
    }

    #[test]
    fn line_height_applies_the_multiplier() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let body = ctx.style(TextRole::Body);
        let natural = fixture.fonts.face(body.font).natural_line_height(body.size);
        assert!((ctx.line_height(&body) - natural * 1.5).abs() < 1e-4);
        let bands = ctx.text_bands("one line", &body, 0.0, 512.0, 1.0);
        assert!((bands[0].height - natural * 1.5).abs() < 1e-4);
    }
}
