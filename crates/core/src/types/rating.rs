//! Star rendering for product ratings.

/// Filled star glyph.
pub const STAR_FULL: char = '★';
/// Half star glyph.
pub const STAR_HALF: char = '⯪';
/// Empty star glyph.
pub const STAR_EMPTY: char = '☆';

/// Render a 0-5 rating as a fixed-width string of exactly 5 star glyphs:
/// one filled star per whole unit, a half star when the fractional part is
/// at least 0.5, and empty stars for the remaining positions.
///
/// Ratings outside 0-5 are clamped.
#[must_use]
pub fn render_stars(rating: f64) -> String {
    let clamped = rating.clamp(0.0, 5.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // clamped to [0, 5] above
    let full = clamped.floor() as usize;
    let half = usize::from(clamped.fract() >= 0.5);
    let empty = 5 - full - half;

    let mut stars = String::with_capacity(5 * STAR_HALF.len_utf8());
    stars.extend(std::iter::repeat_n(STAR_FULL, full));
    stars.extend(std::iter::repeat_n(STAR_HALF, half));
    stars.extend(std::iter::repeat_n(STAR_EMPTY, empty));
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_count(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_always_five_glyphs() {
        for tenths in 0..=50 {
            let rating = f64::from(tenths) / 10.0;
            assert_eq!(glyph_count(&render_stars(rating)), 5, "rating {rating}");
        }
    }

    #[test]
    fn test_full_count_equals_floor() {
        for tenths in 0..=50 {
            let rating = f64::from(tenths) / 10.0;
            let full = render_stars(rating)
                .chars()
                .filter(|&c| c == STAR_FULL)
                .count();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let expected = rating.floor() as usize;
            assert_eq!(full, expected, "rating {rating}");
        }
    }

    #[test]
    fn test_half_star_iff_fraction_at_least_half() {
        for tenths in 0..=50 {
            let rating = f64::from(tenths) / 10.0;
            let has_half = render_stars(rating).contains(STAR_HALF);
            assert_eq!(has_half, rating.fract() >= 0.5, "rating {rating}");
        }
    }

    #[test]
    fn test_exact_renderings() {
        assert_eq!(render_stars(0.0), "☆☆☆☆☆");
        assert_eq!(render_stars(4.6), "★★★★⯪");
        assert_eq!(render_stars(3.2), "★★★☆☆");
        assert_eq!(render_stars(2.5), "★★⯪☆☆");
        assert_eq!(render_stars(5.0), "★★★★★");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(render_stars(-1.0), "☆☆☆☆☆");
        assert_eq!(render_stars(7.3), "★★★★★");
    }
}
