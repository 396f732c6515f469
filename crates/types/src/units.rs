//! Unit conversions shared by the print and slide pipelines.
//!
//! Print layout works in PDF points (1/72 in, `f32`); slide layout works in
//! inches (`f64`) and is serialized as English Metric Units.

pub const POINTS_PER_INCH: f64 = 72.0;
pub const EMU_PER_INCH: i64 = 914_400;
pub const EMU_PER_POINT: i64 = 12_700;

pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH as f64).round() as i64
}

pub fn points_to_emu(points: f64) -> i64 {
    (points * EMU_PER_POINT as f64).round() as i64
}
