/* src/server/core/rust/src/request.rs */

use std::borrow::Cow;

use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Uri, header};

use crate::context::InertiaContext;
use crate::headers;

/// The request facts the adapter reads: method, target, headers and the
/// request-scoped [`InertiaContext`].
#[derive(Debug, Clone)]
pub struct InertiaRequest {
  pub method: Method,
  pub uri: Uri,
  pub headers: HeaderMap,
  pub context: InertiaContext,
}

impl InertiaRequest {
  pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
    Self { method, uri, headers, context: InertiaContext::default() }
  }

  pub fn from_parts(parts: &Parts) -> Self {
    Self {
      method: parts.method.clone(),
      uri: parts.uri.clone(),
      headers: parts.headers.clone(),
      context: parts.extensions.get::<InertiaContext>().cloned().unwrap_or_default(),
    }
  }

  pub fn with_context(mut self, context: InertiaContext) -> Self {
    self.context = context;
    self
  }

  /// Header bytes as sent. Values outside visible ASCII are kept.
  fn header_bytes(&self, name: &HeaderName) -> Option<&[u8]> {
    self.headers.get(name).map(HeaderValue::as_bytes)
  }

  /// Header text; invalid UTF-8 is replaced, never dropped.
  fn header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
    self.header_bytes(name).map(String::from_utf8_lossy)
  }

  /// True when the `X-Inertia` header is present and non-empty.
  pub fn is_inertia(&self) -> bool {
    self.header_bytes(&headers::INERTIA).is_some_and(|v| !v.is_empty())
  }

  /// True when the partial-reload target component equals `component`.
  pub fn is_partial_for(&self, component: &str) -> bool {
    self.header_bytes(&headers::PARTIAL_COMPONENT).unwrap_or_default() == component.as_bytes()
  }

  /// Raw `X-Inertia-Partial-Data` value; empty when absent.
  pub fn partial_data(&self) -> Cow<'_, str> {
    self.header(&headers::PARTIAL_DATA).unwrap_or_default()
  }

  pub fn client_version(&self) -> Option<Cow<'_, str>> {
    self.header(&headers::VERSION)
  }

  /// Byte-exact comparison of `X-Inertia-Version` with `version`; absent
  /// compares as empty.
  pub fn version_matches(&self, version: &str) -> bool {
    self.header_bytes(&headers::VERSION).unwrap_or_default() == version.as_bytes()
  }

  pub fn referer(&self) -> Option<Cow<'_, str>> {
    self.header(&header::REFERER)
  }

  /// The raw request target: path plus query.
  pub fn request_uri(&self) -> &str {
    self.uri.path_and_query().map(|pq| pq.as_str()).unwrap_or_else(|| self.uri.path())
  }
}

impl<B> From<&Request<B>> for InertiaRequest {
  fn from(req: &Request<B>) -> Self {
    Self {
      method: req.method().clone(),
      uri: req.uri().clone(),
      headers: req.headers().clone(),
      context: req.extensions().get::<InertiaContext>().cloned().unwrap_or_default(),
    }
  }
}

impl From<&Parts> for InertiaRequest {
  fn from(parts: &Parts) -> Self {
    Self::from_parts(parts)
  }
}
