//! Slide assembly: an explicit slot for every slide-visible node.
//!
//! Content sections share a header row and a divider; the rows below are
//! stacked from `BODY_TOP` so each row starts where the previous row's
//! pitch ends.

use thirdplane_idf::Document;
use thirdplane_layout::slide::stack_rows;
use thirdplane_layout::{Frame, LayoutError, Slide, SlideCanvas, SlideContext};

const HEADER_TOP: f64 = 0.4;
const HEADER_HEIGHT: f64 = 0.5;
const DIVIDER_Y: f64 = 0.9;
const BODY_TOP: f64 = 1.05;

/// `(height, pitch)` of each body row.
type Rows = [(f64, f64)];

const FOUR_PLANES: &Rows = &[
    (0.55, 0.6),
    (1.7, 1.9),
    (0.3, 0.3),
    (0.45, 0.45),
    (0.4, 0.4),
    (1.0, 1.1),
    (1.2, 1.2),
];
const PHYSICAL: &Rows = &[(0.5, 0.5), (1.2, 1.3), (0.35, 0.35), (3.0, 3.0)];
const PSYCHOLOGICAL: &Rows = &[
    (0.5, 0.55),
    (0.3, 0.3),
    (1.1, 1.15),
    (0.3, 0.3),
    (0.6, 0.65),
    (0.3, 0.3),
    (1.15, 1.25),
    (0.3, 0.35),
    (0.7, 0.7),
];
const SOCIAL: &Rows = &[
    (0.45, 0.45),
    (0.3, 0.3),
    (0.45, 0.5),
    (0.3, 0.35),
    (2.55, 2.6),
    (0.3, 0.3),
    (0.45, 0.45),
    (0.55, 0.55),
];
/// Ends with the closing divider.
const NEEDS: &Rows = &[(0.5, 0.55), (2.28, 2.35), (0.3, 0.3), (0.7, 0.8), (0.0, 0.0)];

fn content_slots(canvas: &SlideCanvas, rows: &Rows) -> Vec<Frame> {
    let pitches: Vec<f64> = rows.iter().map(|(_, pitch)| *pitch).collect();
    let mut frames = vec![
        canvas.row(HEADER_TOP, HEADER_HEIGHT),
        canvas.row(DIVIDER_Y, 0.0),
    ];
    frames.extend(
        stack_rows(BODY_TOP, &pitches)
            .into_iter()
            .zip(rows)
            .map(|(y, (height, _))| canvas.row(y, *height)),
    );
    frames
}

/// Slots of a section, in node order. `None` for unknown sections.
pub fn slots(section_id: &str, canvas: &SlideCanvas) -> Option<Vec<Frame>> {
    let frames = match section_id {
        "cover" => vec![
            Frame::new(5.67, 0.8, 2.0, 2.0),
            Frame::new(1.5, 3.0, 10.33, 1.2),
            Frame::new(2.5, 4.3, 8.33, 0.7),
            canvas.row(5.15, 0.0),
            canvas.row(5.4, 1.2),
            Frame::new(3.9, 6.65, 5.53, 0.35),
        ],
        "four-planes" => content_slots(canvas, FOUR_PLANES),
        "physical" => content_slots(canvas, PHYSICAL),
        "psychological" => content_slots(canvas, PSYCHOLOGICAL),
        "social" => content_slots(canvas, SOCIAL),
        "needs" => {
            let mut frames = content_slots(canvas, NEEDS);
            frames.extend([
                Frame::new(2.0, 5.2, 9.33, 0.35),
                Frame::new(2.0, 5.55, 9.33, 0.45),
                Frame::new(6.345, 6.0, 0.64, 0.64),
                Frame::new(2.0, 6.68, 9.33, 0.25),
            ]);
            frames
        }
        _ => return None,
    };
    Some(frames)
}

/// One slide per section. A section without slots fails with a slot
/// mismatch.
pub fn compose_deck(document: &Document, ctx: &SlideContext<'_>) -> Result<Vec<Slide>, LayoutError> {
    document
        .sections
        .iter()
        .map(|section| {
            let frames = slots(&section.id, &ctx.canvas).unwrap_or_default();
            ctx.compose(section, &frames, &document.footer_label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::worksheet;
    use thirdplane_layout::ImageCatalog;
    use thirdplane_style::Theme;
    use thirdplane_types::Size;

    const EPSILON: f64 = 1e-9;

    fn catalog() -> ImageCatalog {
        ImageCatalog::default().with(crate::content::LOGO, Size::new(400.0, 400.0))
    }

    #[test]
    fn every_section_has_one_slot_per_visible_node() {
        let canvas = SlideCanvas::widescreen();
        for section in &worksheet().sections {
            let frames = slots(&section.id, &canvas).unwrap();
            assert_eq!(frames.len(), section.slide_nodes().count(), "{}", section.id);
        }
        assert!(slots("appendix", &canvas).is_none());
    }

    #[test]
    fn slots_do_not_overlap_and_clear_the_footer() {
        let theme = Theme::montessori();
        let images = catalog();
        let ctx = SlideContext::new(&theme, &images);
        let footer_top = ctx.canvas.footer_frame().y;

        for section in &worksheet().sections {
            let frames = slots(&section.id, &ctx.canvas).unwrap();
            let extents: Vec<Frame> = section
                .slide_nodes()
                .zip(&frames)
                .map(|(node, frame)| ctx.extent(node, *frame))
                .collect();
            for pair in extents.windows(2) {
                assert!(
                    pair[1].y >= pair[0].bottom() - EPSILON,
                    "{}: {:?} overlaps {:?}",
                    section.id,
                    pair[1],
                    pair[0]
                );
            }
            let last = extents.last().unwrap();
            assert!(last.bottom() <= footer_top + EPSILON, "{}", section.id);
            for frame in &extents {
                assert!(frame.right() <= ctx.canvas.width - ctx.canvas.margin + EPSILON);
            }
        }
    }

    #[test]
    fn stacked_body_rows_follow_their_pitch() {
        let canvas = SlideCanvas::widescreen();
        let frames = slots("physical", &canvas).unwrap();
        let tops: Vec<f64> = frames[2..].iter().map(|f| f.y).collect();
        for (got, want) in tops.iter().zip([1.05, 1.55, 2.85, 3.2]) {
            assert!((got - want).abs() < EPSILON);
        }
    }

    #[test]
    fn composes_six_slides_with_footers() {
        let theme = Theme::montessori();
        let images = catalog();
        let ctx = SlideContext::new(&theme, &images);
        let slides = compose_deck(&worksheet(), &ctx).unwrap();
        assert_eq!(slides.len(), 6);
        for slide in &slides {
            assert_eq!(slide.texts()[0], crate::content::SITE_LABEL);
        }
        assert!(slides[0].texts().contains(&"Montessori for\nAdolescents 101"));
    }
}
