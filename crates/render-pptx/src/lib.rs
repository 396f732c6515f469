//! PPTX backend: serializes absolutely positioned slides into a minimal
//! PresentationML package.

mod package;
mod parts;
mod renderer;
mod shapes;
pub mod xml;

pub use renderer::PptxRenderer;
