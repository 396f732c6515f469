//! Page geometry and the per-page decorations drawn around paginated content.

use crate::block::{Band, Block, BlockKind};
use crate::elements::PositionedElement;
use crate::flow::FlowContext;
use crate::fonts::FontLibrary;
use crate::images::ImageCatalog;
use crate::pagination::paginate;
use thirdplane_style::{Margins, TextRole, Theme};
use thirdplane_types::{Rect, Size};

const RIBBON_HEIGHT: f32 = 50.0;
const RIBBON_RULE: f32 = 2.5;
const WATERMARK_WIDTH: f32 = 220.0;
const WATERMARK_ORIGIN: (f32, f32) = (196.0, 286.0);
const WATERMARK_OPACITY: f32 = 0.12;
const FOOTER_SIDE_MARGIN: f32 = 40.0;
const FOOTER_OFFSET: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    /// US Letter with 50pt margins.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margins: Margins::all(50.0),
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margins.horizontal()
    }

    pub fn content_height(&self) -> f32 {
        self.height - self.margins.vertical()
    }
}

/// A finished page. Paint order is background, content, footer.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub background: Vec<PositionedElement>,
    pub content: Vec<PositionedElement>,
    pub footer: Vec<PositionedElement>,
}

impl Page {
    pub fn elements(&self) -> impl Iterator<Item = &PositionedElement> {
        self.background
            .iter()
            .chain(self.content.iter())
            .chain(self.footer.iter())
    }
}

/// Background painter and footer function of the worksheet.
#[derive(Debug, Clone, Copy)]
pub struct PageDecorations<'a> {
    pub theme: &'a Theme,
    pub fonts: &'a FontLibrary,
    pub geometry: PageGeometry,
    pub footer_label: &'a str,
    /// Image key and intrinsic size of the watermark, if any.
    pub watermark: Option<(&'a str, Size)>,
}

impl PageDecorations<'_> {
    /// Full-bleed fill, the faded logo, and on the first page the ribbon.
    pub fn background(&self, page_number: usize) -> Vec<PositionedElement> {
        let palette = &self.theme.palette;
        let (width, height) = (self.geometry.width, self.geometry.height);
        let mut elements = vec![PositionedElement::rect(
            Rect::new(0.0, 0.0, width, height),
            palette.background,
        )];

        if let Some((src, size)) = self.watermark {
            let size = size.fit_width(WATERMARK_WIDTH);
            elements.push(PositionedElement::image(
                Rect::new(WATERMARK_ORIGIN.0, WATERMARK_ORIGIN.1, size.width, size.height),
                src,
                WATERMARK_OPACITY,
            ));
        }

        if page_number == 1 {
            elements.push(PositionedElement::rect(
                Rect::new(0.0, 0.0, width, RIBBON_HEIGHT),
                palette.primary,
            ));
            elements.push(PositionedElement::hline(
                0.0,
                RIBBON_HEIGHT,
                width,
                RIBBON_RULE,
                palette.accent,
            ));
        }
        elements
    }

    /// Branding on the left, `current / total` on the right. Coordinates are
    /// relative to the footer box, see [`Self::footer_origin`].
    pub fn footer(&self, page_number: usize, total: usize) -> Block {
        let images = ImageCatalog::default();
        let width = self.geometry.width - 2.0 * FOOTER_SIDE_MARGIN;
        let ctx = FlowContext::new(self.theme, self.fonts, &images, width);

        let label = ctx.text_bands(self.footer_label, &ctx.style(TextRole::Footer), 0.0, width, 1.0);
        let number = ctx.text_bands(
            &format!("{} / {}", page_number, total),
            &ctx.style(TextRole::PageNumber),
            0.0,
            width,
            1.0,
        );

        let height = label
            .iter()
            .chain(number.iter())
            .map(|b| b.height)
            .fold(0.0, f32::max);
        let elements = label
            .into_iter()
            .chain(number)
            .flat_map(|b| b.elements)
            .collect();
        Block::new(BlockKind::Footer, vec![Band::new(height, elements)])
    }

    /// Top-left corner of the footer box inside the bottom margin.
    pub fn footer_origin(&self) -> (f32, f32) {
        (
            FOOTER_SIDE_MARGIN,
            self.geometry.height - self.geometry.margins.bottom + FOOTER_OFFSET,
        )
    }
}

/// Paginates `blocks` and decorates every page. Footers are computed once the
/// page count is known.
pub fn compose_pages(blocks: &[Block], decorations: &PageDecorations<'_>) -> Vec<Page> {
    let contents = paginate(blocks, &decorations.geometry);
    let total = contents.len();
    let (fx, fy) = decorations.footer_origin();
    log::debug!("Composing {} page(s)", total);

    contents
        .into_iter()
        .enumerate()
        .map(|(index, content)| {
            let number = index + 1;
            let footer = decorations
                .footer(number, total)
                .elements()
                .cloned()
                .map(|e| e.translate(fx, fy))
                .collect();
            Page {
                number,
                background: decorations.background(number),
                content,
                footer,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::LayoutElement;
    use crate::test_utils::Fixture;

    fn decorations(fixture: &Fixture) -> PageDecorations<'_> {
        PageDecorations {
            theme: &fixture.theme,
            fonts: &fixture.fonts,
            geometry: PageGeometry::letter(),
            footer_label: "montessoriforadolescents.com",
            watermark: Some(("logo", Size::new(400.0, 200.0))),
        }
    }

    #[test]
    fn letter_content_box() {
        let g = PageGeometry::letter();
        assert_eq!(g.content_width(), 512.0);
        assert_eq!(g.content_height(), 692.0);
    }

    #[test]
    fn ribbon_only_on_the_first_page() {
        let fixture = Fixture::new();
        let deco = decorations(&fixture);
        let first = deco.background(1);
        let second = deco.background(2);
        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 2);

        let watermark = &second[1];
        assert_eq!((watermark.x, watermark.y), (196.0, 286.0));
        assert_eq!((watermark.width, watermark.height), (220.0, 110.0));
        match &watermark.element {
            LayoutElement::Image(image) => assert_eq!(image.opacity, 0.12),
            other => panic!("expected the watermark, got {}", other),
        }
    }

    #[test]
    fn footer_shows_label_and_page_count() {
        let fixture = Fixture::new();
        let deco = decorations(&fixture);
        let footer = deco.footer(2, 6);
        assert_eq!(footer.texts(), vec!["montessoriforadolescents.com", "2 / 6"]);

        let number = footer.elements().nth(1).unwrap();
        assert!((number.x + number.width - (612.0 - 80.0)).abs() < 0.01);
        let text = number.as_text().unwrap();
        assert_eq!(text.color, fixture.theme.palette.text);
        assert_eq!(text.size, 8.0);
    }

    #[test]
    fn every_page_gets_its_footer() {
        let fixture = Fixture::new();
        let deco = decorations(&fixture);
        let blocks: Vec<Block> = (0..3)
            .map(|i| {
                Block::new(BlockKind::Paragraph, vec![Band::empty(100.0)])
                    .with_page_break(i > 0)
            })
            .collect();
        let pages = compose_pages(&blocks, &deco);
        assert_eq!(pages.len(), 3);
        for page in &pages {
            let texts: Vec<&str> = page
                .footer
                .iter()
                .filter_map(|e| e.as_text())
                .map(|t| t.content.as_str())
                .collect();
            assert_eq!(texts[1], format!("{} / 3", page.number));
            assert!(page.footer.iter().all(|e| e.y >= 742.0));
        }
    }
}
