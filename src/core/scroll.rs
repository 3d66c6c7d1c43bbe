/// Vertical parallax translation in pixels for a given scroll offset.
#[inline]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

#[inline]
pub fn translate_y_css(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// Scroll progress as a percentage of the scrollable height.
///
/// Content that fits in the viewport (no scrollable height) reads as 0%.
/// The result is clamped to `[0, 100]` so overscroll bounce never leaks out.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (100.0 * scroll_top / scrollable).clamp(0.0, 100.0)
}

#[inline]
pub fn percent_css(percent: f64) -> String {
    format!("{}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_heights_read_as_zero() {
        assert_eq!(progress_percent(10.0, f64::NAN, 100.0), 0.0);
        assert_eq!(progress_percent(f64::NAN, 2000.0, 100.0), 0.0);
    }
}
