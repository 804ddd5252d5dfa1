/* src/server/adapter/axum/src/error.rs */

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use inertia_server::InertiaError;

/// Wraps [`InertiaError`] so handlers can return it with `?`.
#[derive(Debug)]
pub struct AxumError(pub InertiaError);

impl From<InertiaError> for AxumError {
  fn from(err: InertiaError) -> Self {
    Self(err)
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    tracing::error!(error = %self.0, ssr = self.0.is_ssr(), "inertia response failed");
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
      "Internal Server Error",
    )
      .into_response()
  }
}
