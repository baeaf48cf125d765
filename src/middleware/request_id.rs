// ABOUTME: Request ID middleware attaching a correlation id to every request and response
// ABOUTME: Reuses a caller-supplied x-request-id or generates req_<uuid>, and records it on the span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{extract::Request, middleware::Next, response::Response};
use http::{HeaderName, HeaderValue};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::constants::server::{REQUEST_ID_HEADER, REQUEST_ID_PREFIX};

/// Longest caller-supplied request id that is reused as-is
const MAX_INBOUND_ID_LEN: usize = 128;

/// Correlation id of the current request, available to handlers as an extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh `req_<uuid>` id
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{REQUEST_ID_PREFIX}{}", Uuid::new_v4().simple()))
    }

    /// Borrow the id
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accept an inbound header value if it is short, visible ASCII
    fn from_inbound(value: &HeaderValue) -> Option<Self> {
        let value = value.to_str().ok()?.trim();
        let acceptable = !value.is_empty()
            && value.len() <= MAX_INBOUND_ID_LEN
            && value.bytes().all(|b| b.is_ascii_graphic());
        acceptable.then(|| Self(value.to_owned()))
    }
}

/// Attach a [`RequestId`] to the request extensions, the tracing span, and the response
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    let request_id = request
        .headers()
        .get(&header)
        .and_then(RequestId::from_inbound)
        .unwrap_or_else(RequestId::generate);

    request.extensions_mut().insert(request_id.clone());

    let span = info_span!(
        "http_request",
        request_id = %request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(header, value);
    }
    response
}
