/* src/server/adapter/axum/src/middleware.rs */

use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::{IntoResponse, Response};
use inertia_server::{Gate, Inertia, InertiaRequest, conflict_response};

use crate::error::AxumError;

/// Reject stale protocol GETs with 409 + `X-Inertia-Location`; forward the rest.
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn version_gate(
  State(inertia): State<Arc<Inertia>>,
  req: Request,
  next: Next,
) -> Response {
  match inertia.version_gate(&InertiaRequest::from(&req)) {
    Gate::Pass => next.run(req).await,
    Gate::Block { location } => match conflict_response(&location) {
      Ok(resp) => resp,
      Err(err) => AxumError(err).into_response(),
    },
  }
}

pub trait InertiaRouterExt {
  /// Layer [`version_gate`] over every route registered so far.
  #[must_use]
  fn inertia_version_gate(self, inertia: Arc<Inertia>) -> Self;
}

impl<S> InertiaRouterExt for Router<S>
where
  S: Clone + Send + Sync + 'static,
{
  fn inertia_version_gate(self, inertia: Arc<Inertia>) -> Self {
    self.layer(from_fn_with_state(inertia, version_gate))
  }
}
