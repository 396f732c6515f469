//! Layout for the two Third Plane documents.
//!
//! Print layout is flow based: content nodes become [`Block`]s made of
//! unbreakable [`Band`]s, which [`paginate`] distributes over US-Letter pages
//! before the page decorations are added. Slide layout is absolute: every
//! node is placed into an explicit [`slide::Frame`] on a fixed canvas.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Section '{section}' has {nodes} slide-visible node(s) but {slots} slot(s).")]
    SlotMismatch {
        section: String,
        nodes: usize,
        slots: usize,
    },
    #[error("Unknown image '{0}'.")]
    UnknownImage(String),
    #[error("Font file '{0}' was not loaded.")]
    MissingFont(String),
    #[error("Font file '{file}' could not be parsed: {message}")]
    InvalidFont { file: String, message: String },
}

pub mod block;
pub mod elements;
pub mod flow;
pub mod fonts;
pub mod images;
pub mod page;
pub mod pagination;
pub mod slide;
pub mod text;

mod standard_metrics;

pub use block::{Band, Block, BlockKind};
pub use elements::{
    ImageElement, LayoutElement, LineElement, PositionedElement, RectElement, TextElement,
};
pub use flow::FlowContext;
pub use fonts::{FaceSource, FontFace, FontLibrary, StandardFont};
pub use images::ImageCatalog;
pub use page::{Page, PageDecorations, PageGeometry, compose_pages};
pub use pagination::paginate;
pub use slide::{Frame, Shape, Slide, SlideCanvas, SlideContext};

pub use thirdplane_types::{Rect, Size};

#[cfg(test)]
mod test_utils;
