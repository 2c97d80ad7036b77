use js_sys::{Function, Reflect, JSON};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

use crate::analytics::{AnalyticsEvent, AnalyticsReporter, NoopReporter};

/// Reports through the page's `gtag` function.
pub struct GtagReporter {
    gtag: Function,
}

impl GtagReporter {
    pub fn detect() -> Option<Self> {
        let window: JsValue = window()?.into();
        let gtag = Reflect::get(&window, &JsValue::from_str("gtag")).ok()?;
        let gtag = gtag.dyn_into::<Function>().ok()?;
        Some(Self { gtag })
    }
}

impl AnalyticsReporter for GtagReporter {
    fn report(&self, event: &AnalyticsEvent) {
        let Ok(params) = JSON::parse(&event.params().to_string()) else {
            return;
        };

        let _ = self.gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event.name()),
            &params,
        );
    }
}

/// Reporter handed to components through a yew context.
#[derive(Clone)]
pub struct Analytics(Rc<dyn AnalyticsReporter>);

impl Analytics {
    pub fn detect() -> Self {
        match GtagReporter::detect() {
            Some(reporter) => Self(Rc::new(reporter)),
            None => Self::default(),
        }
    }

    pub fn report(&self, event: AnalyticsEvent) {
        self.0.report(&event);
    }

    pub fn reporter(&self) -> &dyn AnalyticsReporter {
        self.0.as_ref()
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self(Rc::new(NoopReporter))
    }
}

impl PartialEq for Analytics {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
