//! Local development server: serves the built site and stands in for the
//! hosted form backend that receives contact submissions.

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get_service,
    Form, Router,
};
use serde::Deserialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

use crate::contact::{ContactFields, FORM_CONTENT_TYPE, FORM_ENDPOINT, FORM_NAME};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_FORM_FORWARD_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_FORM_MAX_BODY_BYTES: usize = 16 * 1024;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const FORM_FORWARD_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 60_000);
const FORM_MAX_BODY_BYTES_BOUNDS: (usize, usize) = (1_024, 1024 * 1024);
const USER_AGENT: &str = "luadata-dev-server/1.0";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct DevServerConfig {
    port: u16,
    dist_dir: PathBuf,
    form_forward_url: Option<Url>,
    form_forward_timeout: Duration,
    form_max_body_bytes: usize,
    log_level: LogLevel,
}

impl DevServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; invalid or out-of-range
    /// values fall back to their defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(lookup("PORT"), u64::from(DEFAULT_PORT), PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let form_forward_url = parse_non_empty_string(lookup("FORM_FORWARD_URL"))
            .and_then(|value| parse_http_url(&value));
        let form_forward_timeout_ms = parse_u64_with_bounds(
            lookup("FORM_FORWARD_TIMEOUT_MS"),
            DEFAULT_FORM_FORWARD_TIMEOUT_MS,
            FORM_FORWARD_TIMEOUT_MS_BOUNDS,
        );
        let form_max_body_bytes = parse_usize_with_bounds(
            lookup("FORM_MAX_BODY_BYTES"),
            DEFAULT_FORM_MAX_BODY_BYTES,
            FORM_MAX_BODY_BYTES_BOUNDS,
        );
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(DEFAULT_PORT),
            dist_dir,
            form_forward_url,
            form_forward_timeout: Duration::from_millis(form_forward_timeout_ms),
            form_max_body_bytes,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<DevServerConfig>,
    client: reqwest::Client,
}

impl AppState {
    fn new(config: DevServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.form_forward_timeout)
            .connect_timeout(config.form_forward_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
struct ContactPayload {
    #[serde(rename = "form-name", default)]
    form_name: String,
    #[serde(rename = "bot-field", default)]
    bot_field: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    message: String,
}

impl ContactPayload {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// The relay only runs for the contact form, so `form-name` is implied.
    fn to_fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            message: self.message.clone(),
            bot_field: self.bot_field.clone(),
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DevServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let port = config.port;
    let state = AppState::new(config)?;
    let app = router(state.clone());

    log_event(
        &state.config,
        LogLevel::Debug,
        "dev_server_config",
        serde_json::json!({
            "dist_dir": state.config.dist_dir.display().to_string(),
            "form_forward_host": state.config.form_forward_url.as_ref().and_then(|url| url.host_str()),
            "form_forward_timeout_ms": state.config.form_forward_timeout.as_millis() as u64,
            "form_max_body_bytes": state.config.form_max_body_bytes,
        }),
    );

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("server listening on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    let dist_dir = &state.config.dist_dir;
    let static_service =
        ServeDir::new(dist_dir).not_found_service(ServeFile::new(dist_dir.join("index.html")));

    // The form posts to the page's own path, so GET there still serves the site.
    Router::new()
        .route(FORM_ENDPOINT, get_service(static_service.clone()).post(submit_form))
        .layer(DefaultBodyLimit::max(state.config.form_max_body_bytes))
        .fallback_service(static_service)
        .with_state(state)
}

async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<ContactPayload>,
) -> axum::response::Response {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);

    if payload.form_name != FORM_NAME {
        log_event(
            &state.config,
            LogLevel::Info,
            "form_unknown",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "form_name": payload.form_name.as_str(),
            }),
        );
        return response_with_request_id(StatusCode::NOT_FOUND, "unknown form", &request_id);
    }

    if !payload.bot_field.trim().is_empty() {
        log_event(
            &state.config,
            LogLevel::Info,
            "form_honeypot_dropped",
            serde_json::json!({ "request_id": request_id.as_str() }),
        );
        return response_with_request_id(StatusCode::OK, "ok", &request_id);
    }

    let missing = payload.missing_fields();
    if !missing.is_empty() {
        log_event(
            &state.config,
            LogLevel::Info,
            "form_rejected",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "missing_fields": missing,
            }),
        );
        return response_with_request_id(StatusCode::BAD_REQUEST, "missing required fields", &request_id);
    }

    log_event(
        &state.config,
        LogLevel::Info,
        "form_received",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "email_domain": payload.email.rsplit_once('@').map(|(_, domain)| domain),
            "has_company": !payload.company.trim().is_empty(),
            "message_chars": payload.message.chars().count(),
        }),
    );

    let Some(forward_url) = state.config.form_forward_url.clone() else {
        return response_with_request_id(StatusCode::OK, "ok", &request_id);
    };

    let (status, body) = match forward_submission(&state.client, forward_url, &payload).await {
        Ok(upstream_status) => {
            log_event(
                &state.config,
                LogLevel::Info,
                "form_forwarded",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "upstream_status": upstream_status,
                    "duration_ms": request_started_at.elapsed().as_millis() as u64,
                }),
            );
            (StatusCode::OK, "ok")
        }
        Err(failure) => {
            log_event(
                &state.config,
                LogLevel::Info,
                "form_forward_failed",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "failure_reason": failure.as_str(),
                    "upstream_status": failure.status(),
                    "duration_ms": request_started_at.elapsed().as_millis() as u64,
                }),
            );
            (StatusCode::BAD_GATEWAY, "form relay failed")
        }
    };

    response_with_request_id(status, body, &request_id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ForwardFailure {
    Timeout,
    Connect,
    Upstream(u16),
}

impl ForwardFailure {
    fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Upstream(_) => "upstream_status",
        }
    }

    fn status(self) -> Option<u16> {
        match self {
            Self::Upstream(status) => Some(status),
            Self::Timeout | Self::Connect => None,
        }
    }
}

async fn forward_submission(
    client: &reqwest::Client,
    url: Url,
    payload: &ContactPayload,
) -> Result<u16, ForwardFailure> {
    let response = client
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(payload.to_fields().encode())
        .send()
        .await
        .map_err(|err| {
            if err.is_timeout() {
                ForwardFailure::Timeout
            } else {
                ForwardFailure::Connect
            }
        })?;

    let status = response.status();
    if status.is_success() {
        Ok(status.as_u16())
    } else {
        Err(ForwardFailure::Upstream(status.as_u16()))
    }
}

fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds(raw: Option<String>, default: usize, bounds: (usize, usize)) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_http_url(value: &str) -> Option<Url> {
    let parsed = Url::parse(value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn response_with_request_id(
    status: StatusCode,
    body: &'static str,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, body).into_response()
}

fn log_event(config: &DevServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_config() -> DevServerConfig {
        DevServerConfig::from_lookup(|_| None)
    }

    fn test_state(config: DevServerConfig) -> AppState {
        AppState::new(config).expect("client builds")
    }

    fn valid_payload() -> ContactPayload {
        ContactPayload {
            form_name: FORM_NAME.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            message: "We need a demand forecast.".to_string(),
            ..ContactPayload::default()
        }
    }

    async fn submit(state: AppState, payload: ContactPayload) -> axum::response::Response {
        submit_form(State(state), HeaderMap::new(), Form(payload)).await
    }

    #[test]
    fn config_defaults_when_unset() {
        let config = test_config();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert!(config.form_forward_url.is_none());
        assert_eq!(config.form_forward_timeout, Duration::from_millis(5_000));
        assert_eq!(config.form_max_body_bytes, 16 * 1024);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_rejects_out_of_range_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PORT", "70000"),
            ("FORM_FORWARD_TIMEOUT_MS", "5"),
            ("FORM_MAX_BODY_BYTES", "not-a-number"),
            ("FORM_FORWARD_URL", "ftp://forms.example.com/contact"),
            ("LOG_LEVEL", "trace"),
            ("DIST_DIR", "   "),
        ]);
        let config = DevServerConfig::from_lookup(|name| vars.get(name).map(|value| value.to_string()));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.form_forward_timeout, Duration::from_millis(DEFAULT_FORM_FORWARD_TIMEOUT_MS));
        assert_eq!(config.form_max_body_bytes, DEFAULT_FORM_MAX_BODY_BYTES);
        assert!(config.form_forward_url.is_none(), "only http(s) relays are allowed");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    }

    #[test]
    fn config_accepts_values_in_range() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PORT", " 8080 "),
            ("FORM_FORWARD_TIMEOUT_MS", "250"),
            ("FORM_MAX_BODY_BYTES", "2048"),
            ("FORM_FORWARD_URL", "https://forms.example.com/contact"),
            ("LOG_LEVEL", "DEBUG"),
            ("DIST_DIR", "public"),
        ]);
        let config = DevServerConfig::from_lookup(|name| vars.get(name).map(|value| value.to_string()));

        assert_eq!(config.port, 8080);
        assert_eq!(config.form_forward_timeout, Duration::from_millis(250));
        assert_eq!(config.form_max_body_bytes, 2048);
        assert_eq!(
            config.form_forward_url.as_ref().and_then(|url| url.host_str()),
            Some("forms.example.com")
        );
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
    }

    #[test]
    fn debug_sorts_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[tokio::test]
    async fn valid_submission_is_accepted() {
        let response = submit(test_state(test_config()), valid_payload()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn unknown_form_is_not_found() {
        let payload = ContactPayload {
            form_name: "newsletter".to_string(),
            ..valid_payload()
        };
        let response = submit(test_state(test_config()), payload).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected() {
        let payload = ContactPayload {
            email: "  ".to_string(),
            message: String::new(),
            ..valid_payload()
        };
        assert_eq!(payload.missing_fields(), vec!["email", "message"]);

        let response = submit(test_state(test_config()), payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn honeypot_submission_is_dropped_quietly() {
        let mut config = test_config();
        config.form_forward_url = parse_http_url("http://127.0.0.1:9/contact");
        let payload = ContactPayload {
            bot_field: "spam".to_string(),
            name: String::new(),
            ..valid_payload()
        };

        let response = submit(test_state(config), payload).await;
        assert_eq!(response.status(), StatusCode::OK, "bots must not learn they were caught");
    }

    #[tokio::test]
    async fn relay_failure_is_bad_gateway() {
        let mut config = test_config();
        config.form_forward_url = parse_http_url("http://127.0.0.1:9/contact");
        config.form_forward_timeout = Duration::from_millis(500);

        let response = submit(test_state(config), valid_payload()).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn relayed_body_keeps_field_order() {
        let encoded = valid_payload().to_fields().encode();
        assert!(encoded.starts_with("form-name=contact&bot-field=&name=Ada&email=ada%40example.com"));
        assert!(encoded.ends_with("message=We+need+a+demand+forecast."));
    }

    #[tokio::test]
    async fn router_enforces_form_body_limit() {
        let mut config = test_config();
        config.form_max_body_bytes = 1_024;
        let app = router(test_state(config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port binds");
        let address = listener.local_addr().expect("bound address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client = reqwest::Client::new();
        let endpoint = format!("http://{address}{FORM_ENDPOINT}");
        let post = |body: String| {
            client
                .post(endpoint.as_str())
                .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body)
                .send()
        };

        let oversized = ContactFields {
            message: "x".repeat(4 * 1024),
            ..valid_payload().to_fields()
        };
        let response = post(oversized.encode()).await.expect("server answers");
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = post(valid_payload().to_fields().encode())
            .await
            .expect("server answers");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn request_id_prefers_incoming_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(resolve_request_id(&headers), "abc-123");
        assert!(resolve_request_id(&HeaderMap::new()).starts_with("req-"));
    }
}
