use super::constants::{BAND_CEILING, BAND_FLOOR};

/// Clamps a raw criterion score into the band range and snaps it to the
/// nearest half band.
pub fn to_band(raw: f64) -> f64 {
    let clamped = raw.clamp(BAND_FLOOR, BAND_CEILING);
    (clamped * 2.0).round() / 2.0
}

/// Mean of the criterion bands, formatted to one decimal place.
///
/// Ties round away from zero (`6.25` -> `"6.3"`), which `{:.1}` alone would
/// not do.
pub fn overall_band(scores: &[f64]) -> String {
    if scores.is_empty() {
        return format!("{BAND_FLOOR:.1}");
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let tenths = (mean * 10.0).round() / 10.0;
    format!("{tenths:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::below_floor(1.0, 3.0)]
    #[case::above_ceiling(11.5, 9.0)]
    #[case::inside(6.5, 6.5)]
    #[case::quarter_rounds_up(6.25, 6.5)]
    #[case::just_under_half(6.2, 6.0)]
    fn test_to_band(#[case] raw: f64, #[case] expected: f64) {
        assert_relative_eq!(to_band(raw), expected);
    }

    #[test]
    fn test_overall_band_rounds_tie_up() {
        assert_eq!(overall_band(&[6.0, 7.0, 5.5, 6.5]), "6.3");
    }

    #[test]
    fn test_overall_band_whole_number_keeps_decimal() {
        assert_eq!(overall_band(&[5.0, 5.0, 5.0, 5.0]), "5.0");
    }

    #[test]
    fn test_overall_band_empty_is_floor() {
        assert_eq!(overall_band(&[]), "3.0");
    }
}
