pub const DURATION_MS: f64 = 2_000.0;

/// Count-up animation for a numeric statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
}

impl CounterAnimation {
    /// Only whole numbers animate; text such as `24/7` is left as written.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }

        raw.parse::<u64>().ok().map(|target| Self { target })
    }

    pub fn target(self) -> u64 {
        self.target
    }

    pub fn progress(elapsed_ms: f64) -> f64 {
        if !elapsed_ms.is_finite() {
            return if elapsed_ms > 0.0 { 1.0 } else { 0.0 };
        }
        (elapsed_ms / DURATION_MS).clamp(0.0, 1.0)
    }

    pub fn value_at(self, elapsed_ms: f64) -> u64 {
        let t = Self::progress(elapsed_ms);
        if t >= 1.0 {
            return self.target;
        }

        let eased = ease_out_quart(t);
        let value = (self.target as f64 * eased).floor() as u64;
        value.min(self.target)
    }

    pub fn is_complete(self, elapsed_ms: f64) -> bool {
        Self::progress(elapsed_ms) >= 1.0
    }

    pub fn label(value: u64) -> String {
        format!("{value}+")
    }
}

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_numbers_only() {
        assert_eq!(CounterAnimation::parse("200").map(CounterAnimation::target), Some(200));
        assert_eq!(CounterAnimation::parse(" 95 ").map(CounterAnimation::target), Some(95));
        assert_eq!(CounterAnimation::parse("24/7"), None);
        assert_eq!(CounterAnimation::parse(""), None);
        assert_eq!(CounterAnimation::parse("-3"), None);
        assert_eq!(CounterAnimation::parse("1.5"), None);
        assert_eq!(CounterAnimation::parse("Real-time"), None);
    }

    #[test]
    fn lands_exactly_on_target_at_duration() {
        for target in [1, 7, 50, 95, 200, 999, 12_345, 1_000_000] {
            let counter = CounterAnimation { target };
            assert_eq!(counter.value_at(DURATION_MS), target);
            assert_eq!(counter.value_at(DURATION_MS + 500.0), target);
            assert!(counter.is_complete(DURATION_MS));
        }
    }

    #[test]
    fn starts_at_zero_and_never_overshoots() {
        let counter = CounterAnimation { target: 200 };
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(-16.0), 0);

        let mut previous = 0;
        for frame in 0..=125 {
            let value = counter.value_at(f64::from(frame) * 16.0);
            assert!(value >= previous, "counter must not go backwards");
            assert!(value <= 200);
            previous = value;
        }
    }

    #[test]
    fn follows_quartic_ease_out() {
        let counter = CounterAnimation { target: 100 };
        // t = 0.5 -> 1 - 0.5^4 = 0.9375
        assert_eq!(counter.value_at(1_000.0), 93);
        assert!(!counter.is_complete(1_999.0));
    }

    #[test]
    fn labels_with_plus_suffix() {
        assert_eq!(CounterAnimation::label(0), "0+");
        assert_eq!(CounterAnimation::label(95), "95+");
    }
}
