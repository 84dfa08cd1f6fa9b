use std::time::Duration;

use axum::http::{Method, StatusCode};
use chrono::Utc;
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {

    // RUST_LOG wins, otherwise info for everything
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

}

pub fn format_request(
    method: &Method,
    path: &str,
    trace_id: &str,
    status: StatusCode,
    elapsed: Duration,
) -> String {

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    let trace_id = if trace_id.is_empty() { "-" } else { trace_id };

    format!(
        "{} | {:7} | {:20} | trace {:16} | {} | {}ms",
        timestamp,
        method.as_str(),
        path,
        trace_id,
        status.as_u16(),
        elapsed.as_millis()
    )

}

pub fn log_request(
    method: &Method,
    path: &str,
    trace_id: &str,
    status: StatusCode,
    elapsed: Duration,
) {

    let line = format_request(method, path, trace_id, status, elapsed);

    if request_level(status) == Level::ERROR {
        tracing::error!("{}", line);
    } else {
        tracing::info!("{}", line);
    }

}

// failed jobs surface as 500s, so the access line is their only error record
pub fn request_level(status: StatusCode) -> Level {

    if status.is_server_error() {
        Level::ERROR
    } else {
        Level::INFO
    }

}
