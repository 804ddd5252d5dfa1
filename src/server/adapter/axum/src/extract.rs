/* src/server/adapter/axum/src/extract.rs */

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::Response;
use inertia_server::{Inertia, InertiaRequest, Props};

use crate::error::AxumError;

/// Handler argument that answers an Inertia request.
///
/// Captures the request head together with any props or view data middleware
/// attached via [`inertia_server::InertiaContextExt`]. Needs `Arc<Inertia>` to
/// be reachable from the router state.
pub struct InertiaResponder {
  inertia: Arc<Inertia>,
  request: InertiaRequest,
}

impl InertiaResponder {
  pub fn new(inertia: Arc<Inertia>, request: InertiaRequest) -> Self {
    Self { inertia, request }
  }

  pub fn inertia(&self) -> &Inertia {
    &self.inertia
  }

  pub fn request(&self) -> &InertiaRequest {
    &self.request
  }

  pub fn is_inertia(&self) -> bool {
    self.request.is_inertia()
  }

  pub async fn render(&self, component: &str, props: Props) -> Result<Response, AxumError> {
    Ok(self.inertia.render(&self.request, component, props).await?)
  }

  pub fn location(&self, url: &str) -> Result<Response, AxumError> {
    Ok(self.inertia.location(&self.request, url)?)
  }

  pub fn back(&self) -> Result<Response, AxumError> {
    Ok(self.inertia.back(&self.request)?)
  }
}

impl<S> FromRequestParts<S> for InertiaResponder
where
  Arc<Inertia>: FromRef<S>,
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    Ok(Self::new(Arc::<Inertia>::from_ref(state), InertiaRequest::from_parts(parts)))
  }
}
