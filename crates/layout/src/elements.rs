use thirdplane_style::FontKey;
use thirdplane_types::{Color, Rect};

/// A single drawable item with its position. `y` grows downwards from the
/// top of whatever the element is relative to (band, page, footer).
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Line(LineElement),
    Image(ImageElement),
}

impl std::fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Rectangle(r) => write!(f, "Rectangle({})", r.fill),
            LayoutElement::Line(l) => write!(f, "Line({}, {}pt)", l.color, l.thickness),
            LayoutElement::Image(i) => write!(f, "Image(src=\"{}\")", i.src),
        }
    }
}

/// One line of text. The element box is the line box; `baseline` is the
/// offset of the baseline from its top.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: FontKey,
    pub size: f32,
    pub color: Color,
    pub baseline: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub fill: Color,
}

/// A straight stroke from `(x, y)` to `(x + width, y + height)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LineElement {
    pub color: Color,
    pub thickness: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageElement {
    pub src: String,
    pub opacity: f32,
}

impl PositionedElement {
    pub fn rect(bounds: Rect, fill: Color) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            element: LayoutElement::Rectangle(RectElement { fill }),
        }
    }

    pub fn hline(x: f32, y: f32, width: f32, thickness: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height: 0.0,
            element: LayoutElement::Line(LineElement { color, thickness }),
        }
    }

    pub fn vline(x: f32, y: f32, height: f32, thickness: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height,
            element: LayoutElement::Line(LineElement { color, thickness }),
        }
    }

    pub fn image(bounds: Rect, src: impl Into<String>, opacity: f32) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            element: LayoutElement::Image(ImageElement {
                src: src.into(),
                opacity,
            }),
        }
    }

    pub fn translate(mut self, dx: f32, dy: f32) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(t) => Some(t),
            _ => None,
        }
    }
}
