use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::dom::alert;
use super::gtag::Analytics;
use crate::contact::{
    error_for, submit_contact, ContactField, ContactFields, FieldError, FormTransport,
    SubmissionState, TransportError, FAILURE_NOTICE, FORM_CONTENT_TYPE, FORM_NAME,
    NOTIFICATION_DURATION_MS,
};

struct BrowserTransport;

impl FormTransport for BrowserTransport {
    fn post_form<'a>(
        &'a self,
        endpoint: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<u16, TransportError>> {
        async move {
            let request = Request::post(endpoint)
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body)
                .map_err(|err| TransportError(err.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|err| TransportError(err.to_string()))?;
            Ok(response.status())
        }
        .boxed_local()
    }
}

fn event_value(event: &InputEvent) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_default();
    let fields = use_state(ContactFields::default);
    let errors = use_state(Vec::<FieldError>::new);
    // Held outside the render snapshot so `begin` sees a submit from the same frame.
    let submission = use_mut_ref(SubmissionState::default);
    let redraw = use_force_update();
    let notification_timer = use_mut_ref(|| None::<Timeout>);

    let on_input = |field: ContactField| {
        let fields = fields.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*fields).clone();
            next.set(field, event_value(&event));
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let errors = errors.clone();
        let submission = submission.clone();
        let notification_timer = notification_timer.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let snapshot = (*fields).clone();
            if let Err(found) = snapshot.validate() {
                errors.set(found);
                return;
            }
            if !submission.borrow_mut().begin() {
                return;
            }
            errors.set(Vec::new());
            redraw.force_update();

            let fields = fields.clone();
            let submission = submission.clone();
            let redraw = redraw.clone();
            let analytics = analytics.clone();
            let notification_timer = notification_timer.clone();
            spawn_local(async move {
                let outcome = submit_contact(
                    &BrowserTransport,
                    analytics.reporter(),
                    &snapshot,
                    js_sys::Date::now,
                )
                .await;

                match &outcome.result {
                    Ok(()) => log!("Contact form submitted"),
                    Err(err) => {
                        error!(format!("Form submission error ({}): {err}", err.as_str()));
                        alert(FAILURE_NOTICE);
                    }
                }

                if outcome.clears_fields() {
                    fields.set(ContactFields::default());
                }
                if let Some(expire_at) = outcome.notification_expires_at() {
                    let submission = submission.clone();
                    let redraw = redraw.clone();
                    let timer = Timeout::new(NOTIFICATION_DURATION_MS, move || {
                        submission.borrow_mut().expire_notification(expire_at);
                        redraw.force_update();
                    });
                    *notification_timer.borrow_mut() = Some(timer);
                }

                submission.borrow_mut().settle(&outcome);
                redraw.force_update();
            });
        })
    };

    let view = submission.borrow().clone();
    let submitting = view.is_submitting();

    html! {
        <div class="contact-form-container">
            <form name={FORM_NAME} method="POST" data-netlify="true" class="contact-form" onsubmit={onsubmit} novalidate=true>
                <input type="hidden" name="form-name" value={FORM_NAME} />
                <p style="display: none;">
                    <label>
                        {"Don't fill this out if you're human: "}
                        <input
                            name="bot-field"
                            value={fields.bot_field.clone()}
                            oninput={on_input(ContactField::BotField)}
                        />
                    </label>
                </p>

                <div class="form-group floating-label">
                    <input
                        type="text"
                        id="name"
                        name="name"
                        class="form-input"
                        required=true
                        autocomplete="name"
                        placeholder=" "
                        aria-describedby="name-error"
                        value={fields.name.clone()}
                        oninput={on_input(ContactField::Name)}
                    />
                    <label for="name">{"Your Name *"}</label>
                    <div class="input-line"></div>
                    <div class="error-message" id="name-error" role="alert">{field_error(ContactField::Name)}</div>
                </div>

                <div class="form-group floating-label">
                    <input
                        type="email"
                        id="email"
                        name="email"
                        class="form-input"
                        required=true
                        autocomplete="email"
                        placeholder=" "
                        aria-describedby="email-error"
                        value={fields.email.clone()}
                        oninput={on_input(ContactField::Email)}
                    />
                    <label for="email">{"Your Email *"}</label>
                    <div class="input-line"></div>
                    <div class="error-message" id="email-error" role="alert">{field_error(ContactField::Email)}</div>
                </div>

                <div class="form-group floating-label">
                    <input
                        type="text"
                        id="company"
                        name="company"
                        class="form-input"
                        autocomplete="organization"
                        placeholder=" "
                        value={fields.company.clone()}
                        oninput={on_input(ContactField::Company)}
                    />
                    <label for="company">{"Company Name"}</label>
                    <div class="input-line"></div>
                </div>

                <div class="form-group floating-label">
                    <textarea
                        id="message"
                        rows="4"
                        name="message"
                        class="form-input"
                        required=true
                        placeholder=" "
                        aria-describedby="message-error"
                        value={fields.message.clone()}
                        oninput={on_input(ContactField::Message)}
                    />
                    <label for="message">{"Tell us about your project... *"}</label>
                    <div class="input-line"></div>
                    <div class="error-message" id="message-error" role="alert">{field_error(ContactField::Message)}</div>
                </div>

                <button
                    type="submit"
                    class={classes!("submit-btn", submitting.then_some("loading"))}
                    disabled={submitting}
                    aria-describedby="submit-status"
                >
                    <span class="btn-text">{"Send Message"}</span>
                    <div class="btn-loader" aria-hidden="true">
                        <div class="loader-circle"></div>
                    </div>
                    <svg class="btn-arrow" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                        <path d="M5 12H19M19 12L12 5M19 12L12 19" stroke-width="2" />
                    </svg>
                </button>
                <div id="submit-status" class="sr-only" role="status" aria-live="polite">
                    {if submitting { "Sending your message…" } else { "" }}
                </div>
            </form>

            if view.notification_visible() {
                <div class="form-notification success-notification">
                    <div class="notification-content">
                        <div class="notification-icon">{"✓"}</div>
                        <div class="notification-text">
                            <strong>{"Submission received!"}</strong>
                            <p>{"We will get back to you at our earliest."}</p>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
