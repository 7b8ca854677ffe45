use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{header, HeaderValue};
use std::sync::Arc;
use uuid::Uuid;

/// Request ID wrapper for use in request extensions
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Request id stored by `request_id_middleware`, or `"-"` outside of it
pub fn request_id_of(req: &Request) -> &str {
    req.extensions()
        .get::<RequestId>()
        .map(RequestId::as_str)
        .unwrap_or("-")
}

/// Host the client addressed: the `Host` header, or the URI authority
/// for HTTP/2 requests that carry `:authority` instead.
pub fn request_host(req: &Request) -> Option<String> {
    if let Some(host) = req.headers().get(header::HOST) {
        return host.to_str().ok().map(|s| s.to_string());
    }

    req.uri().authority().map(|a| a.as_str().to_string())
}

/// Request ID middleware - adds a unique ID to each request
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    // Try to get existing request ID from header, or generate new one
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| RequestId::from(s.to_string()))
        .unwrap_or_default();

    req.extensions_mut().insert(request_id.clone());

    tracing::info!(
        request_id = %request_id.as_str(),
        method = %req.method(),
        path = %req.uri().path(),
        "Incoming request"
    );

    let mut response = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert("x-request-id", header_value);
    }

    response
}

/// Host validation middleware - rejects requests whose host is not allowed
pub async fn host_validation_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let host = match request_host(&req) {
        Some(host) if state.allowed_hosts.is_allowed(&host) => return next.run(req).await,
        Some(host) => host,
        None => String::new(),
    };

    tracing::warn!(
        request_id = %request_id_of(&req),
        host = %host,
        "Rejected request with disallowed host"
    );
    AppError::DisallowedHost(host).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_request_id_new() {
        let id = RequestId::new();
        assert_eq!(id.as_str().len(), 36); // UUID v4 length
    }

    #[test]
    fn test_request_id_of_reads_extension() {
        let mut req = axum::http::Request::builder()
            .uri("/health/")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id_of(&req), "-");

        req.extensions_mut()
            .insert(RequestId::from("abc-123".to_string()));
        assert_eq!(request_id_of(&req), "abc-123");
    }

    #[test]
    fn test_request_host_prefers_header() {
        let req = axum::http::Request::builder()
            .uri("http://127.0.0.1:8000/health/")
            .header(header::HOST, "colorchef.onrender.com")
            .body(Body::empty())
            .unwrap();

        assert_eq!(request_host(&req).as_deref(), Some("colorchef.onrender.com"));
    }

    #[test]
    fn test_request_host_falls_back_to_authority() {
        let req = axum::http::Request::builder()
            .uri("http://localhost:8000/health/")
            .body(Body::empty())
            .unwrap();

        assert_eq!(request_host(&req).as_deref(), Some("localhost:8000"));
    }

    #[test]
    fn test_request_host_missing() {
        let req = axum::http::Request::builder()
            .uri("/health/")
            .body(Body::empty())
            .unwrap();

        assert_eq!(request_host(&req), None);
    }
}
