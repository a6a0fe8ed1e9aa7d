use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::{net::TcpListener, time::Instant};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_SEQ: AtomicU64 = AtomicU64::new(0);

// Variant order is severity order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("debug") {
            Some(Self::Debug)
        } else if value.eq_ignore_ascii_case("info") {
            Some(Self::Info)
        } else {
            None
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

/// One JSON object per line on stdout.
#[derive(Clone, Copy, Debug)]
struct Logger {
    min: LogLevel,
}

impl Logger {
    fn line(&self, level: LogLevel, event: &str, fields: Value) -> Option<String> {
        if level < self.min {
            return None;
        }

        let mut line = json!({
            "ts": since_epoch().as_secs(),
            "level": level.as_str(),
            "event": event,
        });
        if let (Some(line), Value::Object(fields)) = (line.as_object_mut(), fields) {
            line.extend(fields);
        }
        Some(line.to_string())
    }

    fn emit(&self, level: LogLevel, event: &str, fields: Value) {
        if let Some(line) = self.line(level, event, fields) {
            println!("{line}");
        }
    }
}

/// Runtime settings for serving the built bundle, read from the environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    bind_host: IpAddr,
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let setting = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        Self {
            bind_host: setting("BIND_ADDR")
                .and_then(|value| value.parse::<IpAddr>().ok())
                .unwrap_or(DEFAULT_BIND_HOST),
            port: setting("PORT")
                .and_then(|value| value.parse::<u16>().ok())
                .filter(|port| *port != 0)
                .unwrap_or(DEFAULT_PORT),
            dist_dir: setting("DIST_DIR").map_or_else(|| PathBuf::from(DEFAULT_DIST_DIR), PathBuf::from),
            log_level: setting("LOG_LEVEL")
                .and_then(|value| LogLevel::parse(&value))
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }

    fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    fn logger(&self) -> Logger {
        Logger { min: self.log_level }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let listener = TcpListener::bind(config.bind_address()).await?;
    serve(listener, config).await
}

async fn serve(listener: TcpListener, config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let local_addr = listener.local_addr()?;

    config.logger().emit(
        LogLevel::Info,
        "server_listening",
        json!({
            "addr": local_addr.to_string(),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

fn router(config: ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config.logger(), log_requests))
}

async fn log_requests(State(logger): State<Logger>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    // Misses and errors are worth seeing at the default level.
    let level = if status.is_success() {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger.emit(
        level,
        "request_complete",
        json!({
            "request_id": request_id,
            "method": method.as_str(),
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn since_epoch() -> Duration {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default()
}

// Reuses the caller's id when one was sent.
fn request_id(headers: &HeaderMap) -> String {
    let supplied = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match supplied {
        Some(value) => value.to_owned(),
        None => {
            let seq = REQUEST_SEQ.fetch_add(1, Ordering::Relaxed);
            format!("req-{:x}-{seq}", since_epoch().as_millis())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    async fn start_server(dist_dir: PathBuf) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let config = ServerConfig {
            bind_host: addr.ip(),
            port: addr.port(),
            dist_dir,
            log_level: LogLevel::Info,
        };

        tokio::spawn(async move {
            let _ = axum::serve(listener, router(config)).await;
        });

        addr
    }

    async fn raw_request(addr: SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.expect("connect");
        stream.write_all(request.as_bytes()).await.expect("write request");
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.expect("read response");
        String::from_utf8_lossy(&response).to_string()
    }

    fn dist_fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").expect("write index");
        std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").expect("write css");
        dir
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_host, DEFAULT_BIND_HOST);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn values_are_trimmed_and_validated() {
        let config = config_from(&[
            ("PORT", " 8080 "),
            ("BIND_ADDR", "127.0.0.1"),
            ("DIST_DIR", "public"),
            ("LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.bind_address(), "127.0.0.1:8080".parse().expect("valid addr"));
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("PORT", "0"),
            ("BIND_ADDR", "not-an-ip"),
            ("DIST_DIR", "   "),
            ("LOG_LEVEL", "verbose"),
        ]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_host, DEFAULT_BIND_HOST);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn request_id_header_is_reused_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(request_id(&headers), "abc-123");

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(request_id(&headers).starts_with("req-"));
    }

    #[test]
    fn generated_request_ids_are_unique() {
        let headers = HeaderMap::new();
        assert_ne!(request_id(&headers), request_id(&headers));
    }

    #[test]
    fn log_levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::parse("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn logger_drops_lines_below_its_level() {
        let logger = Logger { min: LogLevel::Info };
        assert!(logger.line(LogLevel::Debug, "request_complete", json!({})).is_none());

        let line = logger
            .line(LogLevel::Info, "request_complete", json!({ "status": 404 }))
            .expect("info line");
        let parsed: Value = serde_json::from_str(&line).expect("json line");
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "request_complete");
        assert_eq!(parsed["status"], 404);
        assert!(parsed["ts"].as_u64().is_some());
    }

    #[tokio::test]
    async fn serves_bundle_files_with_request_id() {
        let dist = dist_fixture();
        let addr = start_server(dist.path().to_path_buf()).await;

        let response = raw_request(
            addr,
            "GET /style.css HTTP/1.1\r\nHost: localhost\r\nx-request-id: test-1\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.to_ascii_lowercase().contains("x-request-id: test-1"), "{response}");
        assert!(response.ends_with("body { margin: 0; }"), "{response}");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dist = dist_fixture();
        let addr = start_server(dist.path().to_path_buf()).await;

        let response = raw_request(
            addr,
            "GET /missing/page HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 404"), "{response}");
        assert!(response.ends_with("<div id=\"app\"></div>"), "{response}");
    }

    #[tokio::test]
    async fn form_post_is_not_captured_locally() {
        let dist = dist_fixture();
        let addr = start_server(dist.path().to_path_buf()).await;
        let body = "form-name=contact&bot-field=&name=a&email=b&subject=c&message=d";

        let response = raw_request(
            addr,
            &format!(
                "POST / HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            ),
        )
        .await;

        assert!(!response.starts_with("HTTP/1.1 2"), "{response}");
    }
}
