use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge insets in points, in `[left, top, right, bottom]` order when built
/// from an array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `[left, top, right, bottom]`.
    pub const fn ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Width of a grid column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnWidth {
    /// Percentage of the available width.
    Percent(f32),
    /// An equal share of whatever the other columns leave over.
    Star,
}

impl ColumnWidth {
    /// Resolves a set of column widths against the available width.
    ///
    /// Percentage columns take their share first; the remainder is split
    /// evenly among the `Star` columns. Never returns negative widths.
    pub fn resolve(widths: &[ColumnWidth], available: f32) -> Vec<f32> {
        let fixed: f32 = widths
            .iter()
            .map(|w| match w {
                ColumnWidth::Percent(p) => available * p / 100.0,
                ColumnWidth::Star => 0.0,
            })
            .sum();
        let stars = widths
            .iter()
            .filter(|w| matches!(w, ColumnWidth::Star))
            .count();
        let star_width = if stars > 0 {
            ((available - fixed) / stars as f32).max(0.0)
        } else {
            0.0
        };

        widths
            .iter()
            .map(|w| match w {
                ColumnWidth::Percent(p) => (available * p / 100.0).max(0.0),
                ColumnWidth::Star => star_width,
            })
            .collect()
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Percent(p) => write!(f, "{}%", p),
            ColumnWidth::Star => f.write_str("*"),
        }
    }
}
