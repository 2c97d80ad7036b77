//! Contact form model and submission flow.
//!
//! The transport is a trait so the flow runs against gloo-net in the browser
//! and against a scripted transport in tests.

use futures_util::future::LocalBoxFuture;
use std::fmt;

use crate::analytics::{report_submission_success, AnalyticsReporter};

pub const FORM_NAME: &str = "contact";
pub const FORM_ENDPOINT: &str = "/";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const NOTIFICATION_DURATION_MS: u32 = 5_000;
pub const FAILURE_NOTICE: &str = "There was an error submitting the form. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
    BotField,
}

impl ContactField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
            Self::BotField => "bot-field",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub bot_field: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl ContactFields {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
            ContactField::BotField => self.bot_field = value,
        }
    }

    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("form-name", FORM_NAME)
            .append_pair(ContactField::BotField.name(), &self.bot_field)
            .append_pair(ContactField::Name.name(), &self.name)
            .append_pair(ContactField::Email.name(), &self.email)
            .append_pair(ContactField::Company.name(), &self.company)
            .append_pair(ContactField::Message.name(), &self.message)
            .finish()
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Name,
                message: "Please enter your name.",
            });
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Please enter your email.",
            });
        } else if !looks_like_email(self.email.trim()) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Please enter a valid email address.",
            });
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Please tell us about your project.",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .rsplit_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
}

pub fn error_for(errors: &[FieldError], field: ContactField) -> Option<&'static str> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    submitting: bool,
    notification_visible: bool,
    notification_deadline_ms: Option<f64>,
}

impl SubmissionState {
    /// Returns `false`, leaving the state untouched, when a submission is
    /// already in flight. Callers must not deliver on `false`.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn settle(&mut self, outcome: &SubmissionOutcome) {
        self.finish(outcome.succeeded(), outcome.settled_at_ms);
    }

    fn finish(&mut self, succeeded: bool, now_ms: f64) {
        self.submitting = false;
        if succeeded {
            self.notification_visible = true;
            self.notification_deadline_ms = Some(now_ms + f64::from(NOTIFICATION_DURATION_MS));
        }
    }

    pub fn expire_notification(&mut self, now_ms: f64) {
        if self
            .notification_deadline_ms
            .is_some_and(|deadline| now_ms >= deadline)
        {
            self.notification_visible = false;
            self.notification_deadline_ms = None;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification_visible(&self) -> bool {
        self.notification_visible
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportError(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Transport(String),
    Status(u16),
}

impl SubmitError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport_error",
            Self::Status(_) => "http_error",
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(reason) => write!(f, "form submission failed: {reason}"),
            Self::Status(status) => write!(f, "HTTP error! status: {status}"),
        }
    }
}

impl std::error::Error for SubmitError {}

pub trait FormTransport {
    /// Posts a URL-encoded body and resolves to the response status.
    fn post_form<'a>(
        &'a self,
        endpoint: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<u16, TransportError>>;
}

pub async fn deliver<T: FormTransport + ?Sized>(
    transport: &T,
    fields: &ContactFields,
) -> Result<(), SubmitError> {
    let status = transport
        .post_form(FORM_ENDPOINT, fields.encode())
        .await
        .map_err(|TransportError(reason)| SubmitError::Transport(reason))?;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

/// How one delivery attempt ended, stamped with the time it settled.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionOutcome {
    pub result: Result<(), SubmitError>,
    pub settled_at_ms: f64,
}

impl SubmissionOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    pub fn clears_fields(&self) -> bool {
        self.succeeded()
    }

    pub fn notification_expires_at(&self) -> Option<f64> {
        self.succeeded()
            .then(|| self.settled_at_ms + f64::from(NOTIFICATION_DURATION_MS))
    }
}

/// Delivers the form and reports the conversion events once it is accepted.
///
/// The clock is read after the response so the transaction id and the
/// notification deadline share the settle time.
pub async fn submit_contact<T: FormTransport + ?Sized>(
    transport: &T,
    reporter: &dyn AnalyticsReporter,
    fields: &ContactFields,
    clock: impl FnOnce() -> f64,
) -> SubmissionOutcome {
    let result = deliver(transport, fields).await;
    let settled_at_ms = clock();
    if result.is_ok() {
        report_submission_success(reporter, settled_at_ms);
    }

    SubmissionOutcome {
        result,
        settled_at_ms,
    }
}
