//! PDF renderer using lopdf.
//!
//! Paginated worksheet pages are drawn into one content stream per page.
//! TrueType faces are embedded as simple fonts with WinAnsi encoding; images
//! are decoded and stored as Flate-compressed RGB with an alpha soft mask.

mod fonts;
mod images;
mod page;
mod renderer;
pub mod winansi;

pub use renderer::LopdfRenderer;
