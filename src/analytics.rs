use serde_json::{json, Value};

use crate::tabs::SolutionTab;

pub const CONVERSION_SEND_TO: &str = "AW-17153791006/5c18CMjFoNcaEJ6oyPM_";
pub const LEAD_VALUE: u32 = 50;
pub const LEAD_CURRENCY: &str = "USD";

#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticsEvent {
    TabClick { tab: SolutionTab },
    CtaClick,
    ServiceInterest { service: String },
    GenerateLead,
    Conversion { transaction_id: String },
    FormSubmitSuccess,
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TabClick { .. } => "tab_click",
            Self::CtaClick => "click",
            Self::ServiceInterest { .. } => "service_interest",
            Self::GenerateLead => "generate_lead",
            Self::Conversion { .. } => "conversion",
            Self::FormSubmitSuccess => "form_submit_success",
        }
    }

    pub fn params(&self) -> Value {
        match self {
            Self::TabClick { tab } => json!({
                "event_category": "Navigation",
                "event_label": tab.id(),
            }),
            Self::CtaClick => json!({
                "event_category": "CTA",
                "event_label": "Get Started Button",
            }),
            Self::ServiceInterest { service } => json!({
                "event_category": "Services",
                "event_label": service,
            }),
            Self::GenerateLead => json!({
                "currency": LEAD_CURRENCY,
                "value": LEAD_VALUE,
                "event_category": "Lead Generation",
                "event_label": "Contact Form Submitted",
            }),
            Self::Conversion { transaction_id } => json!({
                "send_to": CONVERSION_SEND_TO,
                "value": f64::from(LEAD_VALUE),
                "currency": LEAD_CURRENCY,
                "transaction_id": transaction_id,
            }),
            Self::FormSubmitSuccess => json!({
                "event_category": "Lead Generation",
                "event_label": "Contact Form Completed",
                "value": LEAD_VALUE,
            }),
        }
    }
}

/// Sink for page analytics. Implementations must never fail the caller.
pub trait AnalyticsReporter {
    fn report(&self, event: &AnalyticsEvent);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl AnalyticsReporter for NoopReporter {
    fn report(&self, _event: &AnalyticsEvent) {}
}

/// Events fired, in order, after the contact form is accepted.
pub fn submission_success_events(now_ms: f64) -> [AnalyticsEvent; 3] {
    [
        AnalyticsEvent::GenerateLead,
        AnalyticsEvent::Conversion {
            transaction_id: format!("{}", now_ms.max(0.0) as u64),
        },
        AnalyticsEvent::FormSubmitSuccess,
    ]
}

pub fn report_submission_success(reporter: &dyn AnalyticsReporter, now_ms: f64) {
    for event in submission_success_events(now_ms) {
        reporter.report(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingReporter {
        events: RefCell<Vec<AnalyticsEvent>>,
    }

    impl AnalyticsReporter for RecordingReporter {
        fn report(&self, event: &AnalyticsEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn success_reports_lead_conversion_and_completion_in_order() {
        let reporter = RecordingReporter::default();
        report_submission_success(&reporter, 1_700_000_000_123.0);

        let names = reporter
            .events
            .borrow()
            .iter()
            .map(AnalyticsEvent::name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["generate_lead", "conversion", "form_submit_success"]);

        let conversion = reporter.events.borrow()[1].params();
        assert_eq!(conversion["send_to"], CONVERSION_SEND_TO);
        assert_eq!(conversion["transaction_id"], "1700000000123");
        assert_eq!(conversion["value"], 50.0);
        assert_eq!(conversion["currency"], "USD");
    }

    #[test]
    fn interaction_events_carry_labels() {
        let tab = AnalyticsEvent::TabClick {
            tab: SolutionTab::Automation,
        };
        assert_eq!(tab.name(), "tab_click");
        assert_eq!(tab.params()["event_label"], "automation");

        let service = AnalyticsEvent::ServiceInterest {
            service: "AI Integration".to_string(),
        };
        assert_eq!(service.params()["event_category"], "Services");
        assert_eq!(service.params()["event_label"], "AI Integration");

        assert_eq!(AnalyticsEvent::CtaClick.params()["event_category"], "CTA");
    }

    #[test]
    fn noop_reporter_accepts_everything() {
        let reporter = NoopReporter;
        report_submission_success(&reporter, 0.0);
        reporter.report(&AnalyticsEvent::CtaClick);
    }
}
