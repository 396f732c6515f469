//! Vertical stacking for slide rows.

/// Top edge of every row when rows of the given heights are stacked from
/// `top`: `y[n] = top + heights[0] + ... + heights[n - 1]`.
pub fn stack_rows(top: f64, heights: &[f64]) -> Vec<f64> {
    heights
        .iter()
        .scan(top, |y, h| {
            let row = *y;
            *y += h;
            Some(row)
        })
        .collect()
}

/// Splits `total` into `count` equal rows separated by `gap`. Returns each
/// row's top edge and the shared row height.
pub fn even_rows(top: f64, total: f64, count: usize, gap: f64) -> (Vec<f64>, f64) {
    if count == 0 {
        return (Vec::new(), 0.0);
    }
    let height = ((total - gap * (count - 1) as f64) / count as f64).max(0.0);
    let mut pitches = vec![height + gap; count];
    if let Some(last) = pitches.last_mut() {
        *last = height;
    }
    (stack_rows(top, &pitches), height)
}
