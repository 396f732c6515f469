pub mod color;
pub mod geometry;
pub mod units;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use units::{EMU_PER_INCH, EMU_PER_POINT, POINTS_PER_INCH, inches_to_emu, points_to_emu};
