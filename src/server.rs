use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use serde::Serialize;
use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATIC_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("site directory {0} does not exist; run `trunk build --release` first")]
    MissingDist(PathBuf),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServedRequest<'a> {
    request_id: &'a str,
    method: &'a str,
    path: &'a str,
    status: u16,
    cache_control: &'a str,
    duration_ms: u64,
}

// Variant order is severity order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }

    fn for_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Warn
        } else if status.is_success() || status.is_redirection() {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

#[derive(Clone, Debug)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub static_max_age_seconds: u64,
    pub log_level: LogLevel,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            static_max_age_seconds: DEFAULT_STATIC_MAX_AGE_SECONDS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = non_empty(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_max_age_seconds = u64_with_bounds(
            lookup("STATIC_MAX_AGE_SECONDS"),
            DEFAULT_STATIC_MAX_AGE_SECONDS,
            STATIC_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = non_empty(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            static_max_age_seconds,
            log_level,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[derive(Clone)]
struct HostState {
    config: Arc<HostConfig>,
}

pub fn build_router(config: HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));
    let state = HostState {
        config: Arc::new(config),
    };

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), reject_missing_files))
        .layer(middleware::from_fn_with_state(state, annotate_response))
}

pub async fn run() -> Result<(), ServerError> {
    let config = HostConfig::from_env();

    if !config.dist_dir.is_dir() {
        return Err(ServerError::MissingDist(config.dist_dir));
    }

    let port = config.port;
    let bind_address = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        &serde_json::json!({
            "url": format!("http://127.0.0.1:{port}"),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, build_router(config)).await?;
    Ok(())
}

/// Client-side routes fall back to `index.html`, but a missing file (a path
/// whose last segment has an extension) is a plain 404.
async fn reject_missing_files(State(state): State<HostState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if names_file(path) && !dist_file_exists(&state.config.dist_dir, path) {
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}

fn names_file(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.') && !segment.ends_with(".html"))
}

fn dist_file_exists(dist_dir: &Path, path: &str) -> bool {
    // Encoded or relative paths are left to `ServeDir`, which handles both.
    if path.contains('%') || path.split('/').any(|segment| segment == "..") {
        return true;
    }
    dist_dir.join(path.trim_start_matches('/')).is_file()
}

async fn annotate_response(State(state): State<HostState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let status = response.status();

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let policy = if status.is_success() {
        cache_policy(&path, content_type, state.config.static_max_age_seconds)
    } else {
        "no-store".to_string()
    };

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&policy) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        &state.config,
        LogLevel::for_status(status),
        "request_served",
        &ServedRequest {
            request_id: &request_id,
            method: &method,
            path: &path,
            status: status.as_u16(),
            cache_control: &policy,
            duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        },
    );

    response
}

fn cache_policy(path: &str, content_type: Option<&str>, max_age_seconds: u64) -> String {
    let is_html = content_type.is_some_and(|value| value.starts_with("text/html"))
        || path.ends_with('/')
        || path.ends_with(".html");

    if is_html || max_age_seconds == 0 {
        "no-cache".to_string()
    } else {
        format!("public, max-age={max_age_seconds}")
    }
}

fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

/// `req-<unix millis>-<process-wide sequence>`.
fn generate_request_id() -> String {
    let sequence = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{sequence}", since_epoch().as_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    match headers.get(REQUEST_ID_HEADER).map(HeaderValue::to_str) {
        Some(Ok(value)) if !value.trim().is_empty() => value.trim().to_string(),
        _ => generate_request_id(),
    }
}

#[derive(Serialize)]
struct LogLine<'a, F: Serialize> {
    ts: u64,
    level: LogLevel,
    event: &'a str,
    #[serde(flatten)]
    fields: &'a F,
}

fn log_event<F: Serialize>(config: &HostConfig, level: LogLevel, event: &str, fields: &F) {
    if level < config.log_level {
        return;
    }

    let line = LogLine {
        ts: since_epoch().as_secs(),
        level,
        event,
        fields,
    };
    match serde_json::to_string(&line) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("failed to encode {event} log line: {error}"),
    }
}
