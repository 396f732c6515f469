//! Print assembly: flatten sections into blocks, then paginate.

use thirdplane_idf::Document;
use thirdplane_layout::{Block, FlowContext, LayoutError, Page, PageDecorations, compose_pages};

/// Every section after the first starts on a new page; the break sits on the
/// section's first block.
pub fn worksheet_blocks(document: &Document, ctx: &FlowContext<'_>) -> Result<Vec<Block>, LayoutError> {
    let mut blocks = Vec::with_capacity(document.node_count());
    for (index, section) in document.sections.iter().enumerate() {
        for (position, node) in section.nodes.iter().enumerate() {
            let block = ctx.layout_node(node)?;
            blocks.push(block.with_page_break(index > 0 && position == 0));
        }
    }
    log::debug!(
        "Flattened {} section(s) into {} block(s)",
        document.sections.len(),
        blocks.len()
    );
    Ok(blocks)
}

pub fn compose_worksheet(
    document: &Document,
    ctx: &FlowContext<'_>,
    decorations: &PageDecorations<'_>,
) -> Result<Vec<Page>, LayoutError> {
    let blocks = worksheet_blocks(document, ctx)?;
    Ok(compose_pages(&blocks, decorations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LOGO, SITE_LABEL, worksheet};
    use thirdplane_layout::{FontLibrary, ImageCatalog, PageGeometry};
    use thirdplane_style::Theme;
    use thirdplane_types::Size;

    struct Fixture {
        theme: Theme,
        fonts: FontLibrary,
        images: ImageCatalog,
        geometry: PageGeometry,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                theme: Theme::montessori(),
                fonts: FontLibrary::standard(),
                images: ImageCatalog::default().with(LOGO, Size::new(500.0, 500.0)),
                geometry: PageGeometry::letter(),
            }
        }

        fn pages(&self) -> Vec<Page> {
            let ctx = FlowContext::new(
                &self.theme,
                &self.fonts,
                &self.images,
                self.geometry.content_width(),
            );
            let decorations = PageDecorations {
                theme: &self.theme,
                fonts: &self.fonts,
                geometry: self.geometry,
                footer_label: SITE_LABEL,
                watermark: Some((LOGO, Size::new(500.0, 500.0))),
            };
            compose_worksheet(&worksheet(), &ctx, &decorations).unwrap()
        }
    }

    fn texts(elements: &[thirdplane_layout::elements::PositionedElement]) -> Vec<&str> {
        elements
            .iter()
            .filter_map(|e| e.as_text())
            .map(|t| t.content.as_str())
            .collect()
    }

    #[test]
    fn exactly_one_page_break_per_section_after_the_cover() {
        let fixture = Fixture::new();
        let ctx = FlowContext::new(
            &fixture.theme,
            &fixture.fonts,
            &fixture.images,
            fixture.geometry.content_width(),
        );
        let document = worksheet();
        let blocks = worksheet_blocks(&document, &ctx).unwrap();
        assert_eq!(blocks.len(), document.node_count());
        let breaks = blocks.iter().filter(|b| b.page_break_before).count();
        assert_eq!(breaks, document.sections.len() - 1);
        assert!(!blocks[0].page_break_before);
    }

    #[test]
    fn every_page_has_one_footer_numbered_within_total() {
        let pages = Fixture::new().pages();
        let total = pages.len();
        assert!(total >= 6);
        for page in &pages {
            let footer = texts(&page.footer);
            assert_eq!(
                footer,
                vec![SITE_LABEL.to_string(), format!("{} / {}", page.number, total)]
            );
            assert!(page.number <= total);
        }
    }

    #[test]
    fn sections_start_on_fresh_pages_in_order() {
        let pages = Fixture::new().pages();
        let headers = [
            "The Four Planes of Development",
            "Physical Characteristics",
            "Psychological Characteristics",
            "Social Characteristics",
            "What Adolescents Need",
        ];
        let mut last_page = 1;
        for header in headers {
            let page = pages
                .iter()
                .find(|p| texts(&p.content).first() == Some(&header))
                .unwrap_or_else(|| panic!("no page opens with '{}'", header));
            assert!(page.number > last_page);
            last_page = page.number;
        }
    }

    #[test]
    fn only_the_first_page_carries_the_ribbon() {
        let pages = Fixture::new().pages();
        assert_eq!(pages[0].background.len(), 4);
        assert!(pages[1..].iter().all(|p| p.background.len() == 2));
    }
}
