use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use log::{log, Level};
use serde_json::json;
use std::{
    io::Write,
    net::SocketAddr,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::catalog::{Catalog, ProjectType};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_CACHE_MAX_AGE_SECONDS: u64 = 3_600;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 31_536_000);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub cache_max_age_seconds: u64,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(lookup("PORT"), u64::from(DEFAULT_PORT), PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("PORTFOLIO_DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let cache_max_age_seconds = parse_u64_with_bounds(
            lookup("PORTFOLIO_CACHE_MAX_AGE_SECONDS"),
            DEFAULT_CACHE_MAX_AGE_SECONDS,
            CACHE_MAX_AGE_SECONDS_BOUNDS,
        );

        Self {
            port: u16::try_from(port).unwrap_or(DEFAULT_PORT),
            dist_dir,
            cache_max_age_seconds,
        }
    }

    fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ServerConfig::from_env();
    let catalog = Catalog::embedded()?;
    log_event(
        Level::Info,
        "catalog_loaded",
        json!({
            "projects": catalog.len(),
            "websites": catalog.count_of(ProjectType::Website),
            "graphics": catalog.count_of(ProjectType::Graphic),
            "videos": catalog.count_of(ProjectType::Video),
            "ids": catalog.all().iter().map(|project| project.id.as_str()).collect::<Vec<_>>(),
        }),
    );

    if !config.index_file().is_file() {
        log_event(
            Level::Warn,
            "index_missing",
            json!({
                "path": config.index_file().display().to_string(),
                "hint": "run `trunk build --release` before serving",
            }),
        );
    }

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(address).await?;
    log_event(
        Level::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

/// Static host for the Trunk output. Unknown paths get `index.html` with a 200
/// so client-side routes survive a reload.
pub fn router(config: ServerConfig) -> Router {
    let config = Arc::new(config);
    let static_service =
        ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config, track_request))
}

async fn track_request(
    State(config): State<Arc<ServerConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let status = response.status();

    if status.is_success() {
        let cache_control = cache_control_for(response.headers(), config.cache_max_age_seconds);
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, cache_control);
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        if status.is_server_error() {
            Level::Warn
        } else {
            Level::Info
        },
        "request_completed",
        json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn cache_control_for(headers: &HeaderMap, max_age_seconds: u64) -> HeaderValue {
    let is_html = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"));

    if is_html {
        return HeaderValue::from_static("no-cache");
    }

    HeaderValue::from_str(&format!("public, max-age={max_age_seconds}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}

fn log_event(level: Level, event: &str, fields: serde_json::Value) {
    if !log::log_enabled!(level) {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_millis() as u64 / 1_000)),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    log!(level, "{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn config_from(values: &[(&str, &str)]) -> ServerConfig {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| values.get(name).cloned())
    }

    fn dist_with_assets() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").expect("write index");
        std::fs::write(dir.path().join("app.js"), "console.log('app');").expect("write asset");
        dir
    }

    fn test_config(dist_dir: PathBuf) -> ServerConfig {
        ServerConfig {
            port: DEFAULT_PORT,
            dist_dir,
            cache_max_age_seconds: 60,
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("infallible service");
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        (status, headers, String::from_utf8_lossy(&body).into_owned())
    }

    #[test]
    fn config_defaults_apply_without_environment() {
        let config = config_from(&[]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.cache_max_age_seconds, DEFAULT_CACHE_MAX_AGE_SECONDS);
    }

    #[test]
    fn config_rejects_out_of_bounds_values() {
        assert_eq!(config_from(&[("PORT", "0")]).port, DEFAULT_PORT);
        assert_eq!(config_from(&[("PORT", "70000")]).port, DEFAULT_PORT);
        assert_eq!(config_from(&[("PORT", "not-a-port")]).port, DEFAULT_PORT);
        assert_eq!(
            config_from(&[("PORTFOLIO_CACHE_MAX_AGE_SECONDS", "99999999999")]).cache_max_age_seconds,
            DEFAULT_CACHE_MAX_AGE_SECONDS
        );
    }

    #[test]
    fn config_trims_accepted_values() {
        let config = config_from(&[
            ("PORT", " 9000 "),
            ("PORTFOLIO_DIST_DIR", " public "),
            ("PORTFOLIO_CACHE_MAX_AGE_SECONDS", "0"),
        ]);

        assert_eq!(config.port, 9000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.cache_max_age_seconds, 0);
    }

    #[test]
    fn blank_dist_dir_falls_back_to_default() {
        assert_eq!(
            config_from(&[("PORTFOLIO_DIST_DIR", "   ")]).dist_dir,
            PathBuf::from("dist")
        );
    }

    #[test]
    fn request_id_is_reused_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" upstream-7 "));
        assert_eq!(resolve_request_id(&headers), "upstream-7");

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  "));
        assert!(resolve_request_id(&headers).starts_with("req-"));
        assert!(resolve_request_id(&HeaderMap::new()).starts_with("req-"));
    }

    #[test]
    fn html_is_never_cached() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
        assert_eq!(cache_control_for(&headers, 600), "no-cache");

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/javascript"));
        assert_eq!(cache_control_for(&headers, 600), "public, max-age=600");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dist = dist_with_assets();

        for path in ["/", "/projects", "/projects/graphics", "/gallery"] {
            let (status, headers, body) = get(router(test_config(dist.path().to_path_buf())), path).await;

            assert_eq!(status, StatusCode::OK, "path {path}");
            assert!(body.contains("id=\"app\""), "path {path}");
            assert_eq!(headers.get(header::CACHE_CONTROL).map(|v| v.as_bytes()), Some(&b"no-cache"[..]));
            assert!(headers.contains_key(REQUEST_ID_HEADER));
        }
    }

    #[tokio::test]
    async fn static_assets_are_served_with_max_age() {
        let dist = dist_with_assets();

        let (status, headers, body) = get(router(test_config(dist.path().to_path_buf())), "/app.js").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("console.log"));
        assert_eq!(
            headers.get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"public, max-age=60"[..])
        );
    }
}
