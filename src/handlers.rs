use axum::Json;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use tokio::time::{Instant, sleep};

use crate::AppState;
use crate::error::JobError;
use crate::logger::log_request;
use crate::models::{JobPayload, JobResponse};

pub const JOB_PATH: &str = "/test-job";
// `TRACE_ID` on the wire, header names are stored lowercase
pub const TRACE_ID_HEADER: HeaderName = HeaderName::from_static("trace_id");

/// Reads the `TRACE_ID` header. Absent means empty, non UTF-8 bytes are replaced.
pub fn trace_id(headers: &HeaderMap) -> String {
    headers
        .get(&TRACE_ID_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default()
}

// every request, matched or not, waits out the delay before its handler runs
pub async fn hold(State(state): State<AppState>, request: Request, next: Next) -> Response {

    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let trace = trace_id(request.headers());

    sleep(state.delay).await;

    let response = next.run(request).await;

    log_request(&method, &path, &trace, response.status(), started.elapsed());

    response

}

pub async fn test_job(headers: HeaderMap, body: Bytes) -> Result<Json<JobResponse>, JobError> {

    let payload = JobPayload::from_body(&body)?;

    let trace = trace_id(&headers);
    if trace.is_empty() {
        tracing::warn!("job request without a TRACE_ID header");
    }

    Ok(Json(JobResponse::new(&payload, &trace)))

}

pub async fn not_found() -> StatusCode {

    StatusCode::NOT_FOUND

}
