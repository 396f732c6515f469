use super::rows::{even_rows, stack_rows};
use super::{Frame, LineShape, Picture, RectShape, Shape, SlideContext, TextBox, TextParagraph};
use crate::LayoutError;
use thirdplane_idf::{CardGrid, ComparisonGrid, LabeledTable, Quote, RowLayout, StyledText};
use thirdplane_style::{TextAlign, TextRole, VerticalAlign};
use thirdplane_types::Color;

const CORNER_RADIUS: f64 = 0.05;
const DIVIDER_WIDTH: f32 = 1.5;
const HAIRLINE: f32 = 0.5;
const QUOTE_BAR: f64 = 0.06;
const QUOTE_TEXT_INSET: f64 = 0.3;
const BULLET_INSET: f64 = 0.2;
const GRID_GAP: f64 = 0.1;
const HEADING_BAND: f64 = 0.35;
const LABEL_WIDTH: f64 = 2.2;
const FEATURE_GAP_X: f64 = 0.16;
const FEATURE_GAP_Y: f64 = 0.08;

/// Box height of a quote callout.
pub(crate) fn quote_height(quote: &Quote) -> f64 {
    if quote.attribution.is_some() { 1.2 } else { 0.9 }
}

/// Column frames of equal width separated by `gap`.
fn columns(frame: Frame, count: usize, gap: f64) -> Vec<(f64, f64)> {
    let count = count.max(1);
    let w = ((frame.w - gap * (count - 1) as f64) / count as f64).max(0.0);
    (0..count)
        .map(|i| (frame.x + i as f64 * (w + gap), w))
        .collect()
}

impl SlideContext<'_> {
    fn rect(&self, frame: Frame, fill: Color) -> Shape {
        Shape::Rect(RectShape {
            frame,
            fill,
            corner_radius: None,
        })
    }

    fn rounded(&self, frame: Frame, fill: Color) -> Shape {
        Shape::Rect(RectShape {
            frame,
            fill,
            corner_radius: Some(CORNER_RADIUS),
        })
    }

    fn hline(&self, x: f64, y: f64, w: f64, color: Color, width: f32) -> Shape {
        Shape::Line(LineShape {
            frame: Frame::new(x, y, w, 0.0),
            color,
            width,
        })
    }

    pub(super) fn text(&self, text: &str, role: TextRole, frame: Frame) -> Shape {
        Shape::Text(TextBox::single(frame, text, self.style(role)))
    }

    pub(super) fn styled_text(&self, text: &StyledText, frame: Frame) -> Shape {
        let mut style = self.style(text.role);
        if let Some(align) = text.align {
            style = style.aligned(align);
        }
        Shape::Text(TextBox::single(frame, text.text.as_str(), style))
    }

    /// The image scaled to fit the frame, centered in it.
    pub(super) fn picture(&self, src: &str, frame: Frame) -> Result<Shape, LayoutError> {
        let size = self.images.size(src)?;
        let (iw, ih) = (size.width as f64, size.height as f64);
        let scale = if iw > 0.0 && ih > 0.0 {
            (frame.w / iw).min(frame.h / ih)
        } else {
            0.0
        };
        let (w, h) = (iw * scale, ih * scale);
        Ok(Shape::Picture(Picture {
            frame: Frame::new(
                frame.x + (frame.w - w) / 2.0,
                frame.y + (frame.h - h) / 2.0,
                w,
                h,
            ),
            src: src.to_string(),
        }))
    }

    pub(super) fn divider(&self, frame: Frame) -> Shape {
        self.hline(
            frame.x,
            frame.y,
            frame.w,
            self.theme.palette.accent,
            DIVIDER_WIDTH,
        )
    }

    /// Native bullet paragraphs, inset from the slot edges.
    pub(super) fn bullets(&self, items: &[String], frame: Frame) -> Shape {
        let style = self.style(TextRole::ListItem);
        Shape::Text(TextBox {
            frame: frame.inset_x(BULLET_INSET),
            paragraphs: items
                .iter()
                .map(|item| TextParagraph {
                    text: item.clone(),
                    style,
                    bullet: true,
                })
                .collect(),
            valign: VerticalAlign::Top,
        })
    }

    /// Accent bar, tinted box, centered italic quote and optional attribution.
    /// The box height is intrinsic; only the slot's top, left and width count.
    pub(super) fn quote(&self, quote: &Quote, frame: Frame) -> Vec<Shape> {
        let palette = &self.theme.palette;
        let height = quote_height(quote);
        let attribution = quote.attribution_line();
        let text_x = frame.x + QUOTE_TEXT_INSET;
        let text_w = (frame.w - 2.0 * QUOTE_TEXT_INSET).max(0.0);
        let text_h = height - if attribution.is_some() { 0.45 } else { 0.2 };

        let mut shapes = vec![
            self.rect(Frame::new(frame.x, frame.y, QUOTE_BAR, height), palette.accent),
            self.rect(
                Frame::new(frame.x + QUOTE_BAR, frame.y, frame.w - QUOTE_BAR, height),
                palette.highlight,
            ),
            Shape::Text(
                TextBox::single(
                    Frame::new(text_x, frame.y + 0.1, text_w, text_h),
                    quote.display_text(),
                    self.style(TextRole::Quote),
                )
                .valign(VerticalAlign::Middle),
            ),
        ];
        if let Some(line) = attribution {
            shapes.push(self.text(
                &line,
                TextRole::Attribution,
                Frame::new(text_x, frame.y + height - 0.35, text_w, 0.25),
            ));
        }
        shapes
    }

    /// One card per cell. Centered headings get a tinted heading band above
    /// the body; otherwise the whole cell is a rounded tinted card.
    pub(super) fn grid(&self, grid: &ComparisonGrid, frame: Frame) -> Vec<Shape> {
        let palette = &self.theme.palette;
        let cols = columns(frame, grid.columns(), GRID_GAP);
        let (tops, row_h) = even_rows(frame.y, frame.h, grid.rows(), GRID_GAP);
        let banded = grid.heading_align == TextAlign::Center;
        let heading_style = self.style(TextRole::GridHeading).aligned(grid.heading_align);

        let mut shapes = Vec::new();
        for (index, cell) in grid.cells.iter().enumerate() {
            let (row, col) = grid.position_of(index);
            let (x, w) = cols[col];
            let y = tops[row];
            let heading = cell.heading.replace('\n', " ");

            if banded {
                let band = Frame::new(x, y, w, HEADING_BAND);
                shapes.push(self.rect(band, palette.highlight));
                shapes.push(Shape::Text(
                    TextBox::single(band, heading, heading_style).valign(VerticalAlign::Middle),
                ));
                shapes.push(self.text(
                    &cell.body,
                    TextRole::CellBody,
                    Frame::new(x + 0.1, y + HEADING_BAND + 0.05, w - 0.2, row_h - HEADING_BAND - 0.05),
                ));
            } else {
                shapes.push(self.rounded(Frame::new(x, y, w, row_h), palette.highlight));
                shapes.push(Shape::Text(TextBox::single(
                    Frame::new(x + 0.15, y + 0.08, w - 0.3, 0.3),
                    heading,
                    heading_style,
                )));
                shapes.push(self.text(
                    &cell.body,
                    TextRole::CellBody,
                    Frame::new(x + 0.15, y + 0.35, w - 0.3, row_h - 0.45),
                ));
            }
        }
        shapes
    }

    /// Rows of equal height stacked down the slot, each closed by a hairline.
    pub(super) fn labeled_rows(&self, table: &LabeledTable, frame: Frame) -> Vec<Shape> {
        let palette = &self.theme.palette;
        let count = table.rows.len();
        let row_h = if count == 0 { 0.0 } else { frame.h / count as f64 };
        let tops = stack_rows(frame.y, &vec![row_h; count]);

        let mut shapes = Vec::new();
        for (i, (row, y)) in table.rows.iter().zip(tops).enumerate() {
            let tinted = table.tint.is_tinted(i);
            match table.layout {
                RowLayout::Beside { .. } => {
                    if tinted {
                        shapes.push(self.rect(
                            Frame::new(frame.x, y, LABEL_WIDTH, row_h),
                            palette.highlight,
                        ));
                    }
                    shapes.push(Shape::Text(
                        TextBox::single(
                            Frame::new(frame.x + 0.15, y, LABEL_WIDTH - 0.3, row_h),
                            row.label.as_str(),
                            self.style(TextRole::RowLabel),
                        )
                        .valign(VerticalAlign::Middle),
                    ));
                    shapes.push(self.hline(frame.x, y + row_h, frame.w, palette.border, HAIRLINE));
                    shapes.push(Shape::Text(
                        TextBox::single(
                            Frame::new(
                                frame.x + LABEL_WIDTH + 0.2,
                                y + 0.05,
                                frame.w - LABEL_WIDTH - 0.3,
                                row_h - 0.1,
                            ),
                            row.body.as_str(),
                            self.style(TextRole::CellBody),
                        )
                        .valign(VerticalAlign::Middle),
                    ));
                }
                RowLayout::Stacked => {
                    let box_h = (row_h - 0.05).max(0.0);
                    if tinted {
                        shapes.push(self.rect(Frame::new(frame.x, y, frame.w, box_h), palette.highlight));
                    }
                    shapes.push(self.text(
                        &row.label,
                        TextRole::CardTitle,
                        Frame::new(frame.x + 0.15, y + 0.05, frame.w - 0.3, 0.25),
                    ));
                    shapes.push(self.text(
                        &row.body,
                        TextRole::CellBody,
                        Frame::new(frame.x + 0.15, y + 0.3, frame.w - 0.3, (box_h - 0.35).max(0.0)),
                    ));
                    shapes.push(self.hline(frame.x, y + box_h, frame.w, palette.border, HAIRLINE));
                }
            }
        }
        shapes
    }

    /// Rounded cards. Left-aligned cards read like grid cells; centered ones
    /// are feature quadrants with wider gutters.
    pub(super) fn cards(&self, grid: &CardGrid, frame: Frame) -> Vec<Shape> {
        let palette = &self.theme.palette;
        let centered = grid.align == TextAlign::Center;
        let (gap_x, gap_y) = if centered {
            (FEATURE_GAP_X, FEATURE_GAP_Y)
        } else {
            (GRID_GAP, GRID_GAP)
        };
        let cols = columns(frame, grid.columns, gap_x);
        let (tops, card_h) = even_rows(frame.y, frame.h, grid.rows(), gap_y);
        let columns_count = grid.columns.max(1);

        let mut shapes = Vec::new();
        for (index, card) in grid.cards.iter().enumerate() {
            let (x, w) = cols[index % columns_count];
            let y = tops[index / columns_count];
            shapes.push(self.rounded(Frame::new(x, y, w, card_h), palette.highlight));

            if centered {
                shapes.push(self.text(&card.title, TextRole::FeatureTitle, Frame::new(x, y + 0.1, w, 0.3)));
                let body = self.style(TextRole::CellBody).aligned(TextAlign::Center);
                shapes.push(Shape::Text(TextBox::single(
                    Frame::new(x + 0.2, y + 0.4, w - 0.4, card_h - 0.5),
                    card.body.as_str(),
                    body,
                )));
            } else {
                shapes.push(self.text(
                    &card.title,
                    TextRole::GridHeading,
                    Frame::new(x + 0.15, y + 0.08, w - 0.3, 0.3),
                ));
                shapes.push(self.text(
                    &card.body,
                    TextRole::CellBody,
                    Frame::new(x + 0.15, y + 0.35, w - 0.3, card_h - 0.45),
                ));
            }
        }
        shapes
    }
}
