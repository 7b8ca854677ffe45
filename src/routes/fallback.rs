//! Handling for requests that match no route.
//!
//! With append-slash enabled, `/path` is redirected to `/path/` when the
//! latter is a registered route. Everything else is a JSON 404.

use crate::error::AppError;
use axum::{
    extract::Request,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

/// Fallback state: the registered paths and the append-slash flag
#[derive(Debug, Clone)]
pub struct AppendSlash {
    paths: Arc<[String]>,
    enabled: bool,
}

impl AppendSlash {
    pub fn new<I, P>(paths: I, enabled: bool) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(|p| -> String { p.into() }).collect(),
            enabled,
        }
    }

    /// Where an unmatched URI should be redirected, if anywhere.
    ///
    /// The query string is carried over unchanged.
    pub fn redirect_target(&self, uri: &Uri) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let path = uri.path();
        if path.ends_with('/') {
            return None;
        }

        let slashed = format!("{}/", path);
        if !self.paths.iter().any(|p| *p == slashed) {
            return None;
        }

        Some(match uri.query() {
            Some(query) => format!("{}?{}", slashed, query),
            None => slashed,
        })
    }

    /// Response for a request that no route matched
    pub fn respond(&self, req: &Request) -> Response {
        match self.redirect_target(req.uri()) {
            Some(target) => {
                tracing::debug!(from = %req.uri().path(), to = %target, "Appending slash");
                if matches!(*req.method(), Method::GET | Method::HEAD) {
                    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]).into_response()
                } else {
                    // 308 keeps the method and body
                    Redirect::permanent(&target).into_response()
                }
            }
            None => AppError::NotFound(req.uri().path().to_string()).into_response(),
        }
    }
}
