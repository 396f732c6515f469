//! Absolute layout for the slide deck.
//!
//! Coordinates are inches from the top-left corner of a 13.33 x 7.5 in
//! canvas. Every slide-visible node of a section is placed into one
//! explicit [`Frame`]; shapes keep the order they were produced in, which is
//! also their paint order.

mod primitives;
mod rows;

pub use rows::{even_rows, stack_rows};

use crate::LayoutError;
use crate::images::ImageCatalog;
use thirdplane_idf::{Node, Section};
use thirdplane_style::{Medium, TextRole, TextStyle, Theme, VerticalAlign};
use thirdplane_types::Color;

/// A box on the slide, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Shrinks the frame by `dx` on both sides.
    pub fn inset_x(&self, dx: f64) -> Self {
        Self::new(self.x + dx, self.y, (self.w - 2.0 * dx).max(0.0), self.h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideCanvas {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl SlideCanvas {
    /// The 16:9 widescreen canvas.
    pub fn widescreen() -> Self {
        Self {
            width: 13.33,
            height: 7.5,
            margin: 0.8,
        }
    }

    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// A full-width row between the side margins.
    pub fn row(&self, y: f64, h: f64) -> Frame {
        Frame::new(self.margin, y, self.content_width(), h)
    }

    pub fn footer_frame(&self) -> Frame {
        Frame::new(self.margin, 7.05, 3.0, 0.3)
    }
}

impl Default for SlideCanvas {
    fn default() -> Self {
        Self::widescreen()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub frame: Frame,
    pub fill: Color,
    /// Corner radius in inches; square corners when `None`.
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub frame: Frame,
    pub color: Color,
    /// Stroke width in points.
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextParagraph {
    /// May contain `\n` for line breaks within the paragraph.
    pub text: String,
    pub style: TextStyle,
    pub bullet: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub frame: Frame,
    pub paragraphs: Vec<TextParagraph>,
    pub valign: VerticalAlign,
}

impl TextBox {
    pub fn single(frame: Frame, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            frame,
            paragraphs: vec![TextParagraph {
                text: text.into(),
                style,
                bullet: false,
            }],
            valign: VerticalAlign::Top,
        }
    }

    pub fn valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = valign;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub frame: Frame,
    /// Asset key of the image.
    pub src: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Line(LineShape),
    Text(TextBox),
    Picture(Picture),
}

impl Shape {
    pub fn frame(&self) -> Frame {
        match self {
            Shape::Rect(r) => r.frame,
            Shape::Line(l) => l.frame,
            Shape::Text(t) => t.frame,
            Shape::Picture(p) => p.frame,
        }
    }

    pub fn as_text(&self) -> Option<&TextBox> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub background: Color,
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Text of every paragraph on the slide, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.shapes
            .iter()
            .filter_map(Shape::as_text)
            .flat_map(|t| t.paragraphs.iter().map(|p| p.text.as_str()))
            .collect()
    }
}

/// Theme, canvas and image sizes shared by the slide primitives.
#[derive(Debug, Clone, Copy)]
pub struct SlideContext<'a> {
    pub theme: &'a Theme,
    pub canvas: SlideCanvas,
    pub images: &'a ImageCatalog,
}

impl<'a> SlideContext<'a> {
    pub fn new(theme: &'a Theme, images: &'a ImageCatalog) -> Self {
        Self {
            theme,
            canvas: SlideCanvas::widescreen(),
            images,
        }
    }

    pub fn style(&self, role: TextRole) -> TextStyle {
        self.theme.text_style(role, Medium::Slides)
    }

    /// Branding text in the bottom-left corner of every slide.
    pub fn footer(&self, label: &str) -> Shape {
        Shape::Text(TextBox::single(
            self.canvas.footer_frame(),
            label,
            self.style(TextRole::Footer),
        ))
    }

    /// Places one node into its slot.
    pub fn place(&self, node: &Node, frame: Frame) -> Result<Vec<Shape>, LayoutError> {
        let shapes = match node {
            Node::Spacer(_) => Vec::new(),
            Node::Image(image) => vec![self.picture(&image.src, frame)?],
            Node::Text(text) => vec![self.styled_text(text, frame)],
            Node::SectionHeader(text) => vec![self.text(text, TextRole::SectionHeader, frame)],
            Node::SubHeader(text) => vec![self.text(text, TextRole::SubHeader, frame)],
            Node::Paragraph(text) => vec![self.text(text, TextRole::Body, frame)],
            Node::Bullets(items) => vec![self.bullets(items, frame)],
            Node::Quote(quote) => self.quote(quote, frame),
            Node::Divider => vec![self.divider(frame)],
            Node::Grid(grid) => self.grid(grid, frame),
            Node::Table(table) => self.labeled_rows(table, frame),
            Node::Cards(cards) => self.cards(cards, frame),
        };
        Ok(shapes)
    }

    /// The area a node actually covers when placed into `frame`. Quotes have
    /// an intrinsic height; everything else fills its slot.
    pub fn extent(&self, node: &Node, frame: Frame) -> Frame {
        match node {
            Node::Quote(quote) => Frame::new(frame.x, frame.y, frame.w, primitives::quote_height(quote)),
            Node::Divider => Frame::new(frame.x, frame.y, frame.w, 0.0),
            _ => frame,
        }
    }

    /// Lays out a section as one slide, pairing its slide-visible nodes with
    /// `slots` in order.
    pub fn compose(
        &self,
        section: &Section,
        slots: &[Frame],
        footer_label: &str,
    ) -> Result<Slide, LayoutError> {
        let nodes: Vec<&Node> = section.slide_nodes().collect();
        if nodes.len() != slots.len() {
            return Err(LayoutError::SlotMismatch {
                section: section.id.clone(),
                nodes: nodes.len(),
                slots: slots.len(),
            });
        }

        let mut shapes = vec![self.footer(footer_label)];
        for (node, frame) in nodes.into_iter().zip(slots) {
            shapes.extend(self.place(node, *frame)?);
        }
        log::debug!(
            "Slide '{}' has {} shape(s)",
            section.id,
            shapes.len()
        );
        Ok(Slide {
            background: self.theme.palette.background,
            shapes,
        })
    }
}
