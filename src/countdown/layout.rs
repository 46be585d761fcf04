/// Columns of left margin before the first bulb.
pub const LEFT_MARGIN: u16 = 2;

/// Columns per bulb step: one bulb glyph plus a three-column cord segment.
pub const BULB_SPACING: u16 = 4;

/// How many bulbs fit on one line without wrapping.
///
/// A strand line occupies `2 + n + 3 * (n - 1)` columns (margin, bulbs,
/// cords), which simplifies to `4n - 1 <= width`. When the width is unknown
/// (output redirected somewhere that is not a terminal) the desired count is
/// used unchanged.
pub fn render_count(desired: usize, width: Option<u16>) -> usize {
    match width {
        Some(width) => desired.min(((width as usize + 1) / 4).max(1)),
        None => desired,
    }
}

/// Terminal column of bulb `index` on a strand line.
pub fn bulb_column(index: usize) -> u16 {
    LEFT_MARGIN + index as u16 * BULB_SPACING
}

/// Visible width of a strand line holding `count` bulbs.
pub fn line_width(count: usize) -> usize {
    match count {
        0 => 0,
        n => LEFT_MARGIN as usize + n + 3 * (n - 1),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_count_narrow_terminal() {
        // 30 desired bulbs in a 41-column terminal: min(30, 42 / 4) = 10.
        assert_eq!(render_count(30, Some(41)), 10);
    }

    #[test]
    fn test_render_count_wide_terminal() {
        assert_eq!(render_count(30, Some(200)), 30);
    }

    #[test]
    fn test_render_count_unknown_width_falls_back_to_desired() {
        assert_eq!(render_count(30, None), 30);
    }

    #[test]
    fn test_render_count_never_below_one() {
        assert_eq!(render_count(30, Some(0)), 1);
        assert_eq!(render_count(30, Some(3)), 1);
    }

    #[test]
    fn test_rendered_line_always_fits() {
        for width in 4..=200u16 {
            for desired in 1..=40usize {
                let count = render_count(desired, Some(width));
                assert!(count <= desired);
                assert!(
                    line_width(count) <= width as usize,
                    "count {count} overflows width {width}"
                );
            }
        }
    }

    #[test]
    fn test_bulb_column() {
        assert_eq!(bulb_column(0), 2);
        assert_eq!(bulb_column(1), 6);
        assert_eq!(bulb_column(9), 38);
    }
}
