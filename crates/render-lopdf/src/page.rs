//! Page content streams.

use crate::fonts::resource_name;
use crate::winansi;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::BTreeMap;
use thirdplane_layout::{
    FontLibrary, ImageElement, LayoutElement, LineElement, PositionedElement, TextElement,
};
use thirdplane_render_core::utils::{flip_y, round3};
use thirdplane_types::Color;

/// Resources referenced while drawing, shared by all pages of a document.
#[derive(Debug, Default)]
pub(crate) struct PageResources {
    /// Image key to XObject resource name.
    pub images: BTreeMap<String, String>,
    /// Opacity in thousandths to ExtGState resource name.
    pub states: BTreeMap<u32, String>,
}

impl PageResources {
    fn image_name(&mut self, src: &str) -> String {
        let next = self.images.len() + 1;
        self.images
            .entry(src.to_string())
            .or_insert_with(|| format!("Im{}", next))
            .clone()
    }

    fn state_name(&mut self, opacity: f32) -> String {
        let key = (opacity.clamp(0.0, 1.0) * 1000.0).round() as u32;
        let next = self.states.len() + 1;
        self.states
            .entry(key)
            .or_insert_with(|| format!("GS{}", next))
            .clone()
    }
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    fill_color: Option<Color>,
}

fn rgb(color: Color) -> Vec<Object> {
    color.to_unit_rgb().iter().map(|c| round3(*c).into()).collect()
}

fn num(value: f32) -> Object {
    round3(value).into()
}

pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    fonts: &'a FontLibrary,
    resources: &'a mut PageResources,
}

impl<'a> PageContext<'a> {
    pub fn new(page_height: f32, fonts: &'a FontLibrary, resources: &'a mut PageResources) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
            fonts,
            resources,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Rectangle(rect) => self.draw_rect(el, rect.fill),
            LayoutElement::Line(line) => self.draw_line(el, line),
            LayoutElement::Text(text) => self.draw_text(el, text),
            LayoutElement::Image(image) => self.draw_image(el, image),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.op("rg", rgb(color));
            self.state.fill_color = Some(color);
        }
    }

    fn draw_rect(&mut self, el: &PositionedElement, fill: Color) {
        self.set_fill_color(fill);
        let y = flip_y(el.y + el.height, self.page_height);
        self.op("re", vec![num(el.x), num(y), num(el.width), num(el.height)]);
        self.op("f", vec![]);
    }

    fn draw_line(&mut self, el: &PositionedElement, line: &LineElement) {
        self.op("w", vec![num(line.thickness)]);
        self.op("RG", rgb(line.color));
        self.op("m", vec![num(el.x), num(flip_y(el.y, self.page_height))]);
        self.op(
            "l",
            vec![
                num(el.x + el.width),
                num(flip_y(el.y + el.height, self.page_height)),
            ],
        );
        self.op("S", vec![]);
    }

    /// Runs `draw` inside `q .. Q` with the opacity's graphics state. Cached
    /// state is reset afterwards since `Q` restores the previous one.
    fn with_opacity(&mut self, opacity: f32, draw: impl FnOnce(&mut Self)) {
        if opacity >= 1.0 {
            draw(self);
            return;
        }
        let name = self.resources.state_name(opacity);
        let saved = self.state.clone();
        self.op("q", vec![]);
        self.op("gs", vec![Object::Name(name.into_bytes())]);
        draw(self);
        self.op("Q", vec![]);
        self.state = saved;
    }

    fn draw_text(&mut self, el: &PositionedElement, text: &TextElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.with_opacity(text.opacity, |ctx| {
            ctx.op("BT", vec![]);
            let index = ctx.fonts.face_index(text.font);
            ctx.op(
                "Tf",
                vec![Object::Name(resource_name(index).into_bytes()), num(text.size)],
            );
            ctx.set_fill_color(text.color);
            let baseline = flip_y(el.y + text.baseline, ctx.page_height);
            ctx.op("Td", vec![num(el.x), num(baseline)]);
            ctx.op(
                "Tj",
                vec![Object::String(winansi::encode(&text.content), StringFormat::Literal)],
            );
            ctx.op("ET", vec![]);
        });
    }

    fn draw_image(&mut self, el: &PositionedElement, image: &ImageElement) {
        let name = self.resources.image_name(&image.src);
        self.with_opacity(image.opacity, |ctx| {
            let y = flip_y(el.y + el.height, ctx.page_height);
            ctx.op("q", vec![]);
            ctx.op(
                "cm",
                vec![
                    num(el.width),
                    Object::Integer(0),
                    Object::Integer(0),
                    num(el.height),
                    num(el.x),
                    num(y),
                ],
            );
            ctx.op("Do", vec![Object::Name(name.into_bytes())]);
            ctx.op("Q", vec![]);
        });
    }
}
