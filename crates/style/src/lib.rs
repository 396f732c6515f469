//! Visual theme shared by the print and slide pipelines: palette, font-role
//! bindings, the type scale of both media, and the box-model helpers used by
//! the layout primitives.

pub mod dimension;
pub mod font;
pub mod text;
pub mod theme;

pub use dimension::{ColumnWidth, Margins};
pub use font::{FontFamily, FontKey, FontRole, FontVariant};
pub use text::{Medium, TextAlign, TextRole, TextStyle, VerticalAlign};
pub use theme::{Palette, PaletteColor, Theme};
