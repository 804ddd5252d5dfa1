/* src/server/core/rust/src/ssr.rs */

use crate::errors::InertiaError;
use crate::page::{Page, SsrResponse};

/// Address the Inertia SSR server listens on by default.
pub const DEFAULT_SSR_URL: &str = "http://127.0.0.1:13714";

/// HTTP client for the external SSR service.
///
/// No timeout is applied here; configure it on the `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct SsrClient {
  url: String,
  client: reqwest::Client,
}

impl SsrClient {
  pub fn new(url: impl Into<String>) -> Self {
    Self::with_client(url, reqwest::Client::new())
  }

  pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
    Self { url: url.into(), client }
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  /// The render endpoint, with `/render` present exactly once.
  pub fn endpoint(&self) -> String {
    format!("{}/render", self.url.replace("/render", "").trim_end_matches('/'))
  }

  pub async fn render(&self, page: &Page) -> Result<SsrResponse, InertiaError> {
    let endpoint = self.endpoint();
    tracing::debug!(%endpoint, component = %page.component, "ssr render");

    let resp = self
      .client
      .post(&endpoint)
      .json(page)
      .send()
      .await
      .map_err(InertiaError::SsrTransport)?;

    let status = resp.status().as_u16();
    if status >= 400 {
      return Err(InertiaError::BadSsrStatus(status));
    }

    let bytes = resp.bytes().await.map_err(InertiaError::SsrTransport)?;
    serde_json::from_slice(&bytes).map_err(InertiaError::SsrDecode)
  }
}
