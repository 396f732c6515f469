use super::FlowContext;
use super::table::{CellText, Rule, TableCell, TableRules, TableSpec, VerticalRules};
use crate::LayoutError;
use crate::block::{Band, Block, BlockKind};
use crate::elements::PositionedElement;
use thirdplane_idf::{Quote, StyledText};
use thirdplane_style::{ColumnWidth, Margins, TextAlign, TextRole};
use thirdplane_types::Rect;

pub(crate) const DIVIDER_RULE: f32 = 1.5;
const DIVIDER_SPACE: f32 = 12.0;
const BULLET_INDENT: f32 = 10.0;
const BULLET_GUTTER: f32 = 10.0;
const BULLET: &str = "\u{2022}";
const QUOTE_BAR: f32 = 3.0;

impl FlowContext<'_> {
    pub fn spacer(&self, height: f32) -> Block {
        Block::new(BlockKind::Spacer, Vec::new()).spacing(height.max(0.0), 0.0)
    }

    /// Accent rule across the content width.
    pub fn divider(&self) -> Block {
        let rule = PositionedElement::hline(
            0.0,
            DIVIDER_RULE / 2.0,
            self.width,
            DIVIDER_RULE,
            self.theme.palette.accent,
        );
        Block::new(BlockKind::Divider, vec![Band::new(DIVIDER_RULE, vec![rule])])
            .spacing(DIVIDER_SPACE, DIVIDER_SPACE)
    }

    pub fn section_header(&self, text: &str) -> Block {
        let style = self.style(TextRole::SectionHeader);
        Block::new(
            BlockKind::SectionHeader,
            self.text_bands(text, &style, 0.0, self.width, 1.0),
        )
        .spacing(4.0, 8.0)
    }

    pub fn sub_header(&self, text: &str) -> Block {
        let style = self.style(TextRole::SubHeader);
        Block::new(
            BlockKind::SubHeader,
            self.text_bands(text, &style, 0.0, self.width, 1.0),
        )
        .spacing(10.0, 4.0)
    }

    pub fn paragraph(&self, text: &str) -> Block {
        let style = self.style(TextRole::Body);
        Block::new(
            BlockKind::Paragraph,
            self.text_bands(text, &style, 0.0, self.width, 1.0),
        )
        .spacing(0.0, 6.0)
    }

    /// Items are wrapped independently; the bullet sits on each item's
    /// first line.
    pub fn bullet_list(&self, items: &[String]) -> Block {
        let style = self.style(TextRole::ListItem);
        let text_x = BULLET_INDENT + BULLET_GUTTER;
        let text_width = (self.width - text_x).max(0.0);

        let mut bands = Vec::new();
        for item in items {
            let mut lines = self.text_bands(item, &style, text_x, text_width, 1.0);
            if let Some(first) = lines.first_mut() {
                let bullet_style = style.aligned(TextAlign::Left);
                let mut bullet =
                    self.text_bands(BULLET, &bullet_style, BULLET_INDENT, BULLET_GUTTER, 1.0);
                if let Some(glyph) = bullet.pop() {
                    first.elements.extend(glyph.elements);
                }
            }
            bands.extend(lines);
        }
        Block::new(BlockKind::BulletList, bands).spacing(0.0, 8.0)
    }

    /// Tinted box with an accent bar; one band, so it never splits.
    pub fn quote(&self, quote: &Quote) -> Block {
        let palette = &self.theme.palette;
        let attribution = quote.attribution_line();
        let bottom = if attribution.is_some() { 4.0 } else { 8.0 };

        let mut items = vec![CellText::new(
            quote.display_text(),
            self.style(TextRole::Quote),
            Margins::ltrb(10.0, 8.0, 10.0, bottom),
        )];
        if let Some(line) = attribution {
            items.push(CellText::new(
                line,
                self.style(TextRole::Attribution),
                Margins::ltrb(10.0, 0.0, 10.0, 8.0),
            ));
        }

        let spec = TableSpec {
            widths: vec![ColumnWidth::Star],
            rows: vec![vec![TableCell {
                fill: Some(palette.highlight),
                items,
            }]],
            rules: TableRules {
                horizontal: None,
                vertical: VerticalRules::LeftEdge(Rule {
                    width: QUOTE_BAR,
                    color: palette.accent,
                }),
            },
        };
        Block::new(BlockKind::Quote, self.table_bands(&spec)).spacing(6.0, 8.0)
    }

    /// Centered image at `width` points, height from the aspect ratio.
    pub fn image(&self, src: &str, width: f32) -> Result<Block, LayoutError> {
        let size = self.images.size(src)?.fit_width(width);
        let x = ((self.width - size.width) / 2.0).max(0.0);
        let element = PositionedElement::image(Rect::new(x, 0.0, size.width, size.height), src, 1.0);
        Ok(Block::new(
            BlockKind::Image,
            vec![Band::new(size.height, vec![element])],
        ))
    }

    pub fn styled_text(&self, text: &StyledText) -> Block {
        let mut style = self.style(text.role);
        if let Some(align) = text.align {
            style = style.aligned(align);
        }
        let width = (self.width - text.margin.horizontal()).max(0.0);
        Block::new(
            BlockKind::Text,
            self.text_bands(&text.text, &style, text.margin.left, width, text.opacity),
        )
        .spacing(text.margin.top, text.margin.bottom)
    }
}

#[cfg(test)]
mod tests {
    use crate::block::BlockKind;
    use crate::elements::LayoutElement;
    use crate::test_utils::Fixture;
    use thirdplane_idf::{Quote, StyledText};
    use thirdplane_style::{Margins, TextRole};

    #[test]
    fn divider_spans_the_content_width() {
        let fixture = Fixture::new();
        let block = fixture.ctx().divider();
        assert_eq!(block.kind, BlockKind::Divider);
        assert_eq!((block.space_before, block.space_after), (12.0, 12.0));
        let rule = &block.bands[0].elements[0];
        assert_eq!(rule.width, fixture.ctx().width);
        match &rule.element {
            LayoutElement::Line(line) => {
                assert_eq!(line.thickness, 1.5);
                assert_eq!(line.color, fixture.theme.palette.accent);
            }
            other => panic!("expected a line, got {}", other),
        }
    }

    #[test]
    fn quote_without_attribution_is_shorter_and_has_no_attribution_line() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let text = "We can establish a parallel between childhood and adolescence.";
        let with = ctx.quote(&Quote::new(text, Some("Maria Montessori")));
        let without = ctx.quote(&Quote::new(text, None));

        assert_eq!(with.bands.len(), 1);
        assert_eq!(without.bands.len(), 1);
        assert!(without.content_height() < with.content_height());
        assert!(with.texts().iter().any(|t| t.starts_with('\u{2014}')));
        assert!(!without.texts().iter().any(|t| t.starts_with('\u{2014}')));
        assert!(without.texts()[0].starts_with('\u{201c}'));
    }

    #[test]
    fn quote_with_empty_text_still_lays_out() {
        let fixture = Fixture::new();
        let block = fixture.ctx().quote(&Quote::new("", None));
        assert_eq!(block.bands.len(), 1);
        assert!(block.content_height() > 0.0);
    }

    #[test]
    fn bullets_mark_only_first_lines() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let long = "Both are creative periods where something entirely new is being constructed, ".repeat(3);
        let block = ctx.bullet_list(&[long, "Short item".to_string()]);
        let bullets = block.texts().iter().filter(|t| **t == "\u{2022}").count();
        assert_eq!(bullets, 2);
        assert!(block.bands.len() > 2);
        assert!(block.bands[0].elements.len() == 2);
        assert!(block.bands[1].elements.len() == 1);
        assert_eq!(block.space_after, 8.0);
    }

    #[test]
    fn image_is_centered_at_requested_width() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let block = ctx.image("logo", 100.0).unwrap();
        let el = &block.bands[0].elements[0];
        assert_eq!(el.width, 100.0);
        assert_eq!(el.height, 50.0);
        assert!((el.x - (ctx.width - 100.0) / 2.0).abs() < 1e-4);
        assert!(ctx.image("missing", 10.0).is_err());
    }

    #[test]
    fn styled_text_honours_margins_and_opacity() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let text = StyledText::new(TextRole::Fineprint, "Content sourced from the album.")
            .margin(Margins::ltrb(20.0, 4.0, 20.0, 0.0))
            .opacity(0.7);
        let block = ctx.styled_text(&text);
        assert_eq!(block.space_before, 4.0);
        let el = block.elements().next().unwrap();
        assert!(el.x >= 20.0);
        assert!(el.x + el.width <= ctx.width - 20.0 + 0.01);
        assert_eq!(el.as_text().unwrap().opacity, 0.7);
    }

    #[test]
    fn empty_paragraph_keeps_a_line() {
        let fixture = Fixture::new();
        let block = fixture.ctx().paragraph("");
        assert_eq!(block.bands.len(), 1);
        assert!(block.texts().is_empty());
    }
}
