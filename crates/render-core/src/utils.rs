/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Rounds to three decimals, enough for PDF user space and OOXML percentages.
pub fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_against_the_page_height() {
        assert_eq!(flip_y(0.0, 792.0), 792.0);
        assert_eq!(flip_y(742.0, 792.0), 50.0);
    }

    #[test]
    fn rounds_to_thousandths() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(-0.0004), 0.0);
    }
}
