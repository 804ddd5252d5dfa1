/* src/server/core/rust/src/errors.rs */

use axum::http::header::InvalidHeaderValue;
use inertia_injector::TemplateError;
use thiserror::Error;

/// Boxed error returned by user-supplied deferred props.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a deferred prop, tagged with the path that evaluated it.
#[derive(Debug, Error)]
pub enum PropError {
  #[error("closure prop resolving: {0}")]
  Closure(#[source] BoxError),

  #[error("lazy prop resolving: {0}")]
  Lazy(#[source] BoxError),
}

#[derive(Debug, Error)]
pub enum InertiaError {
  #[error("inertia: could not convert context props to map")]
  InvalidContextProps,

  #[error("inertia: could not convert context view data to map")]
  InvalidContextViewData,

  #[error("resolve prop value `{key}`: {source}")]
  ResolveProp {
    key: String,
    #[source]
    source: PropError,
  },

  #[error("inertia: ssr request failed: {0}")]
  SsrTransport(#[source] reqwest::Error),

  #[error("inertia: bad ssr status code >= 400 ({0})")]
  BadSsrStatus(u16),

  #[error("inertia: could not decode ssr response: {0}")]
  SsrDecode(#[source] serde_json::Error),

  #[error("inertia: could not read root template `{name}`: {source}")]
  TemplateRead {
    name: String,
    #[source]
    source: std::io::Error,
  },

  #[error(transparent)]
  Template(#[from] TemplateError),

  #[error("inertia: json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("inertia: invalid location header: {0}")]
  InvalidLocation(#[from] InvalidHeaderValue),

  #[error("inertia: invalid config: {0}")]
  Config(String),
}

impl InertiaError {
  /// True for failures raised while talking to the SSR service.
  pub fn is_ssr(&self) -> bool {
    matches!(self, Self::SsrTransport(_) | Self::BadSsrStatus(_) | Self::SsrDecode(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolve_prop_display_names_path() {
    let err = InertiaError::ResolveProp {
      key: "album".into(),
      source: PropError::Lazy("db offline".into()),
    };
    assert_eq!(err.to_string(), "resolve prop value `album`: lazy prop resolving: db offline");
  }

  #[test]
  fn closure_display() {
    let err = PropError::Closure("nothing".into());
    assert_eq!(err.to_string(), "closure prop resolving: nothing");
  }

  #[test]
  fn source_chain_reaches_user_error() {
    use std::error::Error as _;
    let err = InertiaError::ResolveProp {
      key: "k".into(),
      source: PropError::Closure("inner".into()),
    };
    let prop = err.source().unwrap();
    assert_eq!(prop.source().unwrap().to_string(), "inner");
  }

  #[test]
  fn ssr_classification() {
    assert!(InertiaError::BadSsrStatus(500).is_ssr());
    assert!(!InertiaError::InvalidContextProps.is_ssr());
  }

  #[test]
  fn bad_status_display() {
    assert_eq!(
      InertiaError::BadSsrStatus(502).to_string(),
      "inertia: bad ssr status code >= 400 (502)"
    );
  }
}
