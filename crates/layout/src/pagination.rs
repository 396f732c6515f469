//! Distributes blocks over pages.
//!
//! Bands are placed top to bottom. A band that does not fit the remaining
//! height moves to the next page and the spacing in front of it is dropped;
//! a block with `page_break_before` always starts a new page unless the
//! current one is still empty. Elements come out in page coordinates.

use crate::block::Block;
use crate::elements::PositionedElement;
use crate::page::PageGeometry;

const EPSILON: f32 = 0.01;

struct PageCursor<'a> {
    geometry: &'a PageGeometry,
    pages: Vec<Vec<PositionedElement>>,
    current: Vec<PositionedElement>,
    y: f32,
    has_content: bool,
}

impl<'a> PageCursor<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: Vec::new(),
            y: 0.0,
            has_content: false,
        }
    }

    fn fits(&self, height: f32) -> bool {
        let available = (self.geometry.content_height() - self.y).max(0.0);
        height <= available + EPSILON
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = 0.0;
        self.has_content = false;
    }

    fn place(&mut self, elements: &[PositionedElement]) {
        let (dx, dy) = (self.geometry.margins.left, self.geometry.margins.top + self.y);
        self.current
            .extend(elements.iter().cloned().map(|e| e.translate(dx, dy)));
    }

    fn finish(mut self) -> Vec<Vec<PositionedElement>> {
        if self.has_content || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Returns the content elements of every page. There is always at least one
/// page.
pub fn paginate(blocks: &[Block], geometry: &PageGeometry) -> Vec<Vec<PositionedElement>> {
    let mut cursor = PageCursor::new(geometry);
    let mut pending = 0.0;

    for (index, block) in blocks.iter().enumerate() {
        if block.page_break_before && cursor.has_content {
            log::debug!(
                "Block {} ({:?}) starts page {}",
                index,
                block.kind,
                cursor.pages.len() + 2
            );
            cursor.break_page();
            pending = 0.0;
        }
        pending += block.space_before;

        for band in &block.bands {
            if cursor.has_content && !cursor.fits(pending + band.height) {
                log::debug!(
                    "Band of block {} ({:?}, {:.1}pt) overflows page {}",
                    index,
                    block.kind,
                    band.height,
                    cursor.pages.len() + 1
                );
                cursor.break_page();
                pending = 0.0;
            } else if !cursor.has_content && !cursor.fits(pending + band.height) {
                log::warn!(
                    "Band of block {} ({:?}, {:.1}pt) is taller than a page",
                    index,
                    block.kind,
                    band.height
                );
            }
            cursor.y += pending;
            cursor.place(&band.elements);
            cursor.y += band.height;
            cursor.has_content = true;
            pending = 0.0;
        }
        pending += block.space_after;
    }

    cursor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Band, BlockKind};
    use thirdplane_types::{Color, Rect};

    fn band(height: f32) -> Band {
        Band::new(
            height,
            vec![PositionedElement::rect(
                Rect::new(0.0, 0.0, 10.0, height),
                Color::gray(0),
            )],
        )
    }

    fn block(bands: &[f32]) -> Block {
        Block::new(BlockKind::Paragraph, bands.iter().map(|h| band(*h)).collect())
    }

    fn tops(page: &[PositionedElement]) -> Vec<f32> {
        page.iter().map(|e| e.y).collect()
    }

    #[test]
    fn empty_input_yields_one_page() {
        let pages = paginate(&[], &PageGeometry::letter());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn elements_are_offset_by_the_margins() {
        let geometry = PageGeometry::letter();
        let pages = paginate(&[block(&[10.0, 10.0]).spacing(5.0, 0.0)], &geometry);
        assert_eq!(tops(&pages[0]), vec![55.0, 65.0]);
        assert_eq!(pages[0][0].x, 50.0);
    }

    #[test]
    fn overflowing_band_moves_and_drops_its_spacing() {
        let geometry = PageGeometry::letter();
        // 692pt of content height: 600 + (20 + 100) overflows.
        let blocks = vec![block(&[600.0]), block(&[100.0]).spacing(20.0, 0.0)];
        let pages = paginate(&blocks, &geometry);
        assert_eq!(pages.len(), 2);
        assert_eq!(tops(&pages[1]), vec![50.0]);
    }

    #[test]
    fn bands_of_one_block_split_across_pages() {
        let geometry = PageGeometry::letter();
        let pages = paginate(&[block(&[300.0, 300.0, 300.0])], &geometry);
        assert_eq!(pages.len(), 2);
        assert_eq!(tops(&pages[0]), vec![50.0, 350.0]);
        assert_eq!(tops(&pages[1]), vec![50.0]);
    }

    #[test]
    fn explicit_breaks_start_new_pages_but_not_empty_ones() {
        let geometry = PageGeometry::letter();
        let blocks = vec![
            block(&[10.0]).with_page_break(true),
            block(&[10.0]).with_page_break(true).spacing(4.0, 0.0),
            block(&[10.0]),
        ];
        let pages = paginate(&blocks, &geometry);
        assert_eq!(pages.len(), 2);
        assert_eq!(tops(&pages[0]), vec![50.0]);
        assert_eq!(tops(&pages[1]), vec![54.0, 64.0]);
    }

    #[test]
    fn exact_fit_stays_on_the_page() {
        let geometry = PageGeometry::letter();
        let height = geometry.content_height();
        let pages = paginate(&[block(&[height / 2.0, height / 2.0])], &geometry);
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn spacers_accumulate_with_margins() {
        let geometry = PageGeometry::letter();
        let spacer = Block::new(BlockKind::Spacer, Vec::new()).spacing(60.0, 0.0);
        let blocks = vec![spacer, block(&[10.0]).spacing(4.0, 6.0), block(&[10.0])];
        let pages = paginate(&blocks, &geometry);
        assert_eq!(tops(&pages[0]), vec![114.0, 130.0]);
    }
}
