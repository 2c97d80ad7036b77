//! Scroll and viewport driven effects, packaged as hooks. Each hook owns the
//! guards for what it registers and drops them when the component unmounts.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys::Element;
use yew::prelude::*;

use super::dom::{
    add_class, prefers_reduced_motion, query_all, scroll_metrics, scroll_y, set_style,
    viewport_size, AnimationLoop, ViewportObserver, WindowListener,
};
use crate::counter::CounterAnimation;
use crate::particles::{ParticleField, PARTICLE_COUNT};
use crate::reveal::{
    fill_width_percent, FollowUp, ObservationKey, ObservationRegistry, Observed, ObserverOptions,
    RevealTarget, ANIMATE_IN_CLASS, COUNTER_SELECTOR, HIDDEN_OPACITY, HIDDEN_TRANSFORM,
    HIDDEN_TRANSITION, ICON_ANIMATION, OBSERVATION_KEY_ATTR, OBSERVE_DELAY_MS, REVEAL_SELECTOR,
    SERVICE_ICON_SELECTOR, STAT_FILL_SELECTOR,
};
use crate::scroll::{progress_percent, FrameThrottle, HeaderState};

#[derive(Clone, Copy, PartialEq)]
pub struct ScrollView {
    pub progress: f64,
    pub header: HeaderState,
}

#[hook]
pub fn use_scroll_effects() -> ScrollView {
    let progress = use_state_eq(|| 0.0_f64);
    let header = use_state_eq(HeaderState::default);

    {
        let progress = progress.clone();
        let header = header.clone();
        use_effect_with((), move |_| {
            let progress_listener = WindowListener::add("scroll", move || {
                progress.set(progress_percent(scroll_metrics()));
            });

            let pending_frame: Rc<RefCell<Option<AnimationLoop>>> = Rc::default();
            let header_listener = {
                let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
                let machine = Rc::new(RefCell::new(HeaderState::default()));
                let pending_frame = pending_frame.clone();
                WindowListener::add("scroll", move || {
                    if !throttle.borrow_mut().request() {
                        return;
                    }

                    let throttle = throttle.clone();
                    let machine = machine.clone();
                    let header = header.clone();
                    let frame = AnimationLoop::start(move |_| {
                        let next = {
                            let mut machine = machine.borrow_mut();
                            machine.update(scroll_y());
                            *machine
                        };
                        header.set(next);
                        throttle.borrow_mut().complete();
                        false
                    });
                    *pending_frame.borrow_mut() = Some(frame);
                })
            };

            move || {
                drop(progress_listener);
                drop(header_listener);
                pending_frame.borrow_mut().take();
            }
        });
    }

    ScrollView {
        progress: *progress,
        header: *header,
    }
}

#[hook]
pub fn use_hero_particles(layer: NodeRef) {
    use_effect_with((), move |_| {
        let particle_loop = if prefers_reduced_motion() {
            None
        } else {
            let mut field =
                ParticleField::new(PARTICLE_COUNT, viewport_size(), js_sys::Date::now() as u64);
            Some(AnimationLoop::start(move |_| {
                let Some(layer) = layer.cast::<Element>() else {
                    return false;
                };

                let (width, height) = viewport_size();
                field.set_viewport(width, height);
                field.tick();
                layer.set_inner_html(&field.render_markup());
                true
            }))
        };

        move || drop(particle_loop)
    });
}

#[derive(Default)]
struct ViewportEffects {
    registry: ObservationRegistry<Observed>,
    observers: Vec<ViewportObserver>,
    timers: Vec<Timeout>,
    counters: Vec<AnimationLoop>,
}

/// Entrance animations, count-up counters and stat bar fills.
#[hook]
pub fn use_viewport_effects() {
    use_effect_with((), |_| {
        let effects = Rc::new(RefCell::new(ViewportEffects::default()));

        let start = {
            let effects = Rc::downgrade(&effects);
            Timeout::new(OBSERVE_DELAY_MS, move || {
                let Some(shared) = effects.upgrade() else {
                    return;
                };

                let observers = [
                    observe_reveals(&shared),
                    observe_counters(&shared),
                    observe_stat_fills(&shared),
                ];
                shared
                    .borrow_mut()
                    .observers
                    .extend(observers.into_iter().flatten());
            })
        };

        move || {
            drop(start);
            let released = std::mem::take(&mut *effects.borrow_mut());
            drop(released);
        }
    });
}

fn track(effects: &Rc<RefCell<ViewportEffects>>, element: &Element, observed: Observed) {
    let key = effects.borrow_mut().registry.register(observed);
    let _ = element.set_attribute(OBSERVATION_KEY_ATTR, &key.as_attr());
}

/// The tracked payload on an element's first intersection, `None` after that.
fn first_entry(
    effects: &Weak<RefCell<ViewportEffects>>,
    element: &Element,
) -> Option<(Rc<RefCell<ViewportEffects>>, Observed)> {
    let effects = effects.upgrade()?;
    let key = element
        .get_attribute(OBSERVATION_KEY_ATTR)
        .as_deref()
        .and_then(ObservationKey::from_attr)?;
    let observed = effects.borrow_mut().registry.trigger(key).copied()?;
    Some((effects, observed))
}

fn hide_until_revealed(element: &Element) {
    set_style(element, "opacity", HIDDEN_OPACITY);
    set_style(element, "transform", HIDDEN_TRANSFORM);
    set_style(element, "transition", HIDDEN_TRANSITION);
}

fn reveal(element: &Element, target: RevealTarget) {
    add_class(element, ANIMATE_IN_CLASS);
    set_style(element, "opacity", "1");
    set_style(element, "transform", "translateY(0)");
    if let Some(animation) = target.card_animation() {
        set_style(element, "animation", animation);
    }
}

fn fill_stat_bar(bar: &Element) {
    let width = fill_width_percent(bar.get_attribute("data-width").as_deref());
    set_style(bar, "width", &width);
}

fn schedule_follow_up(card: Element, follow_up: FollowUp) -> Timeout {
    match follow_up {
        FollowUp::FillStatBar { delay_ms } => Timeout::new(delay_ms, move || {
            if let Ok(Some(bar)) = card.query_selector(STAT_FILL_SELECTOR) {
                fill_stat_bar(&bar);
            }
        }),
        FollowUp::PopServiceIcon { delay_ms } => Timeout::new(delay_ms, move || {
            if let Ok(Some(icon)) = card.query_selector(SERVICE_ICON_SELECTOR) {
                set_style(&icon, "animation", ICON_ANIMATION);
            }
        }),
    }
}

fn observe_reveals(effects: &Rc<RefCell<ViewportEffects>>) -> Option<ViewportObserver> {
    let observer = {
        let effects = Rc::downgrade(effects);
        ViewportObserver::new(ObserverOptions::REVEAL, move |element, observer| {
            observer.unobserve(element);
            let Some((effects, Observed::Reveal(target))) = first_entry(&effects, element) else {
                return;
            };

            reveal(element, target);
            if let Some(follow_up) = target.follow_up() {
                let timer = schedule_follow_up(element.clone(), follow_up);
                effects.borrow_mut().timers.push(timer);
            }
        })?
    };

    for element in query_all(REVEAL_SELECTOR) {
        let class_name = element.class_name();
        let target = RevealTarget::from_classes(class_name.split_whitespace());
        track(effects, &element, Observed::Reveal(target));
        hide_until_revealed(&element);
        observer.observe(&element);
    }

    Some(observer)
}

fn observe_counters(effects: &Rc<RefCell<ViewportEffects>>) -> Option<ViewportObserver> {
    let observer = {
        let effects = Rc::downgrade(effects);
        ViewportObserver::new(ObserverOptions::HALF_VISIBLE, move |element, observer| {
            observer.unobserve(element);
            let Some((effects, Observed::Counter(counter))) = first_entry(&effects, element)
            else {
                return;
            };

            let element = element.clone();
            let mut started_at = None;
            let animation = AnimationLoop::start(move |timestamp| {
                let elapsed = timestamp - *started_at.get_or_insert(timestamp);
                let value = counter.value_at(elapsed);
                element.set_text_content(Some(&CounterAnimation::label(value)));
                !counter.is_complete(elapsed)
            });
            effects.borrow_mut().counters.push(animation);
        })?
    };

    for element in query_all(COUNTER_SELECTOR) {
        let Some(counter) = element
            .get_attribute("data-target")
            .as_deref()
            .and_then(CounterAnimation::parse)
        else {
            continue;
        };
        track(effects, &element, Observed::Counter(counter));
        observer.observe(&element);
    }

    Some(observer)
}

fn observe_stat_fills(effects: &Rc<RefCell<ViewportEffects>>) -> Option<ViewportObserver> {
    let observer = {
        let effects = Rc::downgrade(effects);
        ViewportObserver::new(ObserverOptions::HALF_VISIBLE, move |element, observer| {
            observer.unobserve(element);
            if let Some((_, Observed::StatFill)) = first_entry(&effects, element) {
                fill_stat_bar(element);
            }
        })?
    };

    for element in query_all(STAT_FILL_SELECTOR) {
        track(effects, &element, Observed::StatFill);
        observer.observe(&element);
    }

    Some(observer)
}
