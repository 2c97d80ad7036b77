/// Offset past which the header switches to its compact "scrolled" style.
pub const HEADER_SCROLLED_THRESHOLD: f64 = 100.0;
/// Minimum depth before scrolling down is allowed to hide the header.
pub const HEADER_HIDE_THRESHOLD: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// Percentage of the page scrolled, always within `[0, 100]`.
///
/// A page that fits entirely in the viewport reports 0 rather than dividing
/// by a zero scroll range.
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let max_scroll = metrics.max_scroll();
    if max_scroll <= 0.0 || !metrics.scroll_y.is_finite() {
        return 0.0;
    }

    (metrics.scroll_y / max_scroll * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub visible: bool,
    last_scroll_y: f64,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            scrolled: false,
            visible: true,
            last_scroll_y: 0.0,
        }
    }
}

impl HeaderState {
    pub fn update(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > HEADER_SCROLLED_THRESHOLD;
        self.visible = !(scroll_y > self.last_scroll_y && scroll_y > HEADER_HIDE_THRESHOLD);
        self.last_scroll_y = scroll_y;
    }

    pub fn transform(&self) -> &'static str {
        if self.visible {
            "translateY(0)"
        } else {
            "translateY(-100%)"
        }
    }
}

/// Coalesces high-frequency events into at most one update per frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            document_height: 3_000.0,
            viewport_height: 1_000.0,
        }
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(progress_percent(metrics(0.0)), 0.0);
        assert_eq!(progress_percent(metrics(1_000.0)), 50.0);
        assert_eq!(progress_percent(metrics(2_000.0)), 100.0);
    }

    #[test]
    fn progress_is_clamped_outside_the_scroll_range() {
        assert_eq!(progress_percent(metrics(-40.0)), 0.0);
        assert_eq!(progress_percent(metrics(2_500.0)), 100.0);
    }

    #[test]
    fn progress_is_zero_when_page_fits_viewport() {
        let short_page = ScrollMetrics {
            scroll_y: 0.0,
            document_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(progress_percent(short_page), 0.0);

        let shorter_than_viewport = ScrollMetrics {
            scroll_y: 12.0,
            document_height: 500.0,
            viewport_height: 800.0,
        };
        assert_eq!(progress_percent(shorter_than_viewport), 0.0);
    }

    #[test]
    fn progress_matches_linear_ratio_across_range() {
        for step in 0..=20 {
            let scroll_y = f64::from(step) * 100.0;
            let expected = scroll_y / 2_000.0 * 100.0;
            assert!((progress_percent(metrics(scroll_y)) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn header_marks_scrolled_past_threshold() {
        let mut header = HeaderState::default();
        header.update(100.0);
        assert!(!header.scrolled);
        header.update(101.0);
        assert!(header.scrolled);
        header.update(40.0);
        assert!(!header.scrolled);
    }

    #[test]
    fn header_hides_only_when_scrolling_down_past_minimum_depth() {
        let mut header = HeaderState::default();

        header.update(150.0);
        assert!(header.visible, "downward but shallow keeps header visible");

        header.update(250.0);
        assert!(!header.visible);
        assert_eq!(header.transform(), "translateY(-100%)");

        header.update(250.0);
        assert!(header.visible, "no movement is not a downward delta");

        header.update(900.0);
        assert!(!header.visible);

        header.update(899.0);
        assert!(header.visible, "any upward movement shows the header");
        assert_eq!(header.transform(), "translateY(0)");

        header.update(950.0);
        assert!(!header.visible, "the previous position is the last update");
    }

    #[test]
    fn throttle_allows_one_pending_frame() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());

        throttle.complete();
        assert!(throttle.request());
        assert!(!throttle.request());
    }
}
