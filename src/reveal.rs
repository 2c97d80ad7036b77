//! Fire-once bookkeeping for viewport-triggered effects.
//!
//! The browser side keeps one [`ObservationRegistry`] of [`Observed`]
//! targets, stores each [`ObservationKey`] on its element and asks the
//! registry whether an intersection should act. Each key acts at most once,
//! however many times the element re-enters the viewport.

use crate::counter::CounterAnimation;

pub const REVEAL_SELECTOR: &str = ".service-card, .stat-card, .solution-card, .contact-feature";
pub const COUNTER_SELECTOR: &str = ".stat-number[data-target]";
pub const STAT_FILL_SELECTOR: &str = ".stat-fill";
pub const SERVICE_ICON_SELECTOR: &str = ".service-icon";
pub const ANIMATE_IN_CLASS: &str = "animate-in";
pub const OBSERVATION_KEY_ATTR: &str = "data-observe-key";
/// Markup needs a moment to land before targets are queried.
pub const OBSERVE_DELAY_MS: u32 = 100;

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const HIDDEN_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";
pub const CARD_ANIMATION: &str = "slideInUp 0.6s ease both";
pub const ICON_ANIMATION: &str = "scaleIn 0.4s ease both";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };
    pub const HALF_VISIBLE: Self = Self {
        threshold: 0.5,
        root_margin: "0px",
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationKey(usize);

impl ObservationKey {
    pub fn as_attr(self) -> String {
        self.0.to_string()
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(Self)
    }
}

struct Observation<T> {
    payload: T,
    triggered: bool,
}

pub struct ObservationRegistry<T> {
    entries: Vec<Observation<T>>,
}

impl<T> Default for ObservationRegistry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> ObservationRegistry<T> {
    pub fn register(&mut self, payload: T) -> ObservationKey {
        self.entries.push(Observation {
            payload,
            triggered: false,
        });
        ObservationKey(self.entries.len() - 1)
    }

    /// Returns the payload the first time `key` fires and `None` afterwards.
    pub fn trigger(&mut self, key: ObservationKey) -> Option<&T> {
        let entry = self.entries.get_mut(key.0)?;
        if entry.triggered {
            return None;
        }
        entry.triggered = true;
        Some(&entry.payload)
    }

}

/// What an observed element does when it first enters the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observed {
    Reveal(RevealTarget),
    Counter(CounterAnimation),
    StatFill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    Plain,
    StatCard,
    ServiceCard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    FillStatBar { delay_ms: u32 },
    PopServiceIcon { delay_ms: u32 },
}

impl RevealTarget {
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut target = Self::Plain;
        for class in classes {
            match class {
                "stat-card" => return Self::StatCard,
                "service-card" => target = Self::ServiceCard,
                _ => {}
            }
        }
        target
    }

    pub fn card_animation(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::StatCard | Self::ServiceCard => Some(CARD_ANIMATION),
        }
    }

    pub fn follow_up(self) -> Option<FollowUp> {
        match self {
            Self::Plain => None,
            Self::StatCard => Some(FollowUp::FillStatBar { delay_ms: 300 }),
            Self::ServiceCard => Some(FollowUp::PopServiceIcon { delay_ms: 200 }),
        }
    }
}

/// CSS width for a stat bar from its `data-width` attribute.
pub fn fill_width_percent(raw: Option<&str>) -> String {
    let width = raw
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0))
        .unwrap_or(100.0);

    format!("{width}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_fires_once_per_key() {
        let mut registry = ObservationRegistry::default();
        let card = registry.register(RevealTarget::ServiceCard);
        let feature = registry.register(RevealTarget::Plain);

        assert_eq!(registry.trigger(card), Some(&RevealTarget::ServiceCard));
        for _ in 0..5 {
            assert_eq!(registry.trigger(card), None, "re-entry must not reveal again");
        }

        assert_eq!(registry.trigger(feature), Some(&RevealTarget::Plain));
        assert_eq!(registry.trigger(feature), None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut registry: ObservationRegistry<()> = ObservationRegistry::default();
        assert_eq!(registry.trigger(ObservationKey(3)), None);

        let key = registry.register(());
        assert_eq!(registry.trigger(ObservationKey(3)), None);
        assert_eq!(registry.trigger(key), Some(&()));
    }

    #[test]
    fn one_registry_keeps_every_kind_apart() {
        let counter = CounterAnimation::parse("500").expect("digits parse");
        let mut registry = ObservationRegistry::default();
        let card = registry.register(Observed::Reveal(RevealTarget::StatCard));
        let number = registry.register(Observed::Counter(counter));
        let fill = registry.register(Observed::StatFill);

        assert_eq!(registry.trigger(number).copied(), Some(Observed::Counter(counter)));
        assert_eq!(registry.trigger(number), None);
        assert_eq!(
            registry.trigger(card).copied(),
            Some(Observed::Reveal(RevealTarget::StatCard))
        );
        assert_eq!(registry.trigger(fill).copied(), Some(Observed::StatFill));
        assert_eq!(registry.trigger(card), None);
    }

    #[test]
    fn keys_round_trip_through_attributes() {
        let mut registry = ObservationRegistry::default();
        registry.register(1u8);
        let key = registry.register(2u8);
        assert_eq!(ObservationKey::from_attr(&key.as_attr()), Some(key));
        assert_eq!(ObservationKey::from_attr("card"), None);
    }

    #[test]
    fn target_kind_comes_from_classes() {
        assert_eq!(
            RevealTarget::from_classes("stat-card animate-in".split_whitespace()),
            RevealTarget::StatCard
        );
        assert_eq!(
            RevealTarget::from_classes(["service-card"]),
            RevealTarget::ServiceCard
        );
        assert_eq!(
            RevealTarget::from_classes(["solution-card"]),
            RevealTarget::Plain
        );
        assert_eq!(RevealTarget::Plain.follow_up(), None);
        assert_eq!(
            RevealTarget::StatCard.follow_up(),
            Some(FollowUp::FillStatBar { delay_ms: 300 })
        );
        assert_eq!(
            RevealTarget::ServiceCard.follow_up(),
            Some(FollowUp::PopServiceIcon { delay_ms: 200 })
        );
    }

    #[test]
    fn fill_width_defaults_to_full() {
        assert_eq!(fill_width_percent(Some("90")), "90%");
        assert_eq!(fill_width_percent(Some("150")), "100%");
        assert_eq!(fill_width_percent(Some("wide")), "100%");
        assert_eq!(fill_width_percent(None), "100%");
    }
}
