//! Thin wrappers over browser primitives. Every registration is returned as
//! a guard that releases it when dropped, so effects can hand teardown to
//! yew by dropping their guards.

use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::reveal::ObserverOptions;
use crate::scroll::ScrollMetrics;

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_metrics() -> ScrollMetrics {
    let document_height = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|body| f64::from(body.scroll_height()))
        .unwrap_or(0.0);

    ScrollMetrics {
        scroll_y: scroll_y(),
        document_height,
        viewport_height: viewport_size().1,
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Document offset of the element with `id`, if it exists.
pub fn element_document_top(id: &str) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top() + scroll_y())
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Window event listener removed on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn add(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(handler);
        window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

struct LoopState {
    frame_id: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
    stopped: bool,
}

/// `requestAnimationFrame` loop. The callback returns whether another frame
/// is wanted; dropping the handle cancels whatever frame is pending.
pub struct AnimationLoop {
    state: Rc<RefCell<LoopState>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(RefCell::new(LoopState {
            frame_id: None,
            callback: None,
            stopped: false,
        }));

        let weak = Rc::downgrade(&state);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.borrow_mut().frame_id = None;

            if state.borrow().stopped {
                return;
            }

            if on_frame(timestamp) {
                schedule_frame(&state);
            } else {
                state.borrow_mut().stopped = true;
            }
        });

        state.borrow_mut().callback = Some(callback);
        schedule_frame(&state);

        Self { state }
    }
}

fn schedule_frame(state: &Rc<RefCell<LoopState>>) {
    let Some(win) = window() else {
        return;
    };

    let mut state = state.borrow_mut();
    if state.stopped {
        return;
    }

    let frame_id = state
        .callback
        .as_ref()
        .and_then(|callback| win.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
    state.frame_id = frame_id;
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            return;
        };
        state.stopped = true;
        if let (Some(frame_id), Some(win)) = (state.frame_id.take(), window()) {
            let _ = win.cancel_animation_frame(frame_id);
        }
        state.callback = None;
    }
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// IntersectionObserver that reports entering elements and disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl ViewportObserver {
    pub fn new(
        options: ObserverOptions,
        mut on_enter: impl FnMut(&Element, &IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let callback: EntryCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_enter(&entry.target(), &observer);
                    }
                }
            });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
