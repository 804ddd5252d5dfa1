/* src/server/core/rust/src/config.rs */

use std::sync::Arc;

use crate::errors::InertiaError;
use crate::ssr::{DEFAULT_SSR_URL, SsrClient};
use crate::template::TemplateFs;

/// Construction-time settings for [`crate::Inertia`].
#[derive(Clone)]
pub struct InertiaConfig {
  /// Base URL prepended to the request path on version-mismatch redirects.
  pub url: String,
  /// Root template name: a file path, or a name inside `template_fs`.
  pub root_template: String,
  /// Current asset version.
  pub version: String,
  pub template_fs: Option<Arc<dyn TemplateFs>>,
  pub ssr: Option<SsrClient>,
}

impl InertiaConfig {
  pub fn builder() -> InertiaConfigBuilder {
    InertiaConfigBuilder::default()
  }
}

#[derive(Default)]
pub struct InertiaConfigBuilder {
  url: String,
  root_template: String,
  version: String,
  template_fs: Option<Arc<dyn TemplateFs>>,
  ssr_url: Option<String>,
  ssr_client: Option<reqwest::Client>,
}

impl InertiaConfigBuilder {
  pub fn url(mut self, url: impl Into<String>) -> Self {
    self.url = url.into();
    self
  }

  pub fn root_template(mut self, root_template: impl Into<String>) -> Self {
    self.root_template = root_template.into();
    self
  }

  pub fn version(mut self, version: impl Into<String>) -> Self {
    self.version = version.into();
    self
  }

  pub fn template_fs(mut self, fs: impl TemplateFs + 'static) -> Self {
    self.template_fs = Some(Arc::new(fs));
    self
  }

  pub fn ssr_url(mut self, url: impl Into<String>) -> Self {
    self.ssr_url = Some(url.into());
    self
  }

  /// HTTP client for SSR calls; set timeouts on it. Without `ssr_url` the
  /// default SSR address is used.
  pub fn ssr_client(mut self, client: reqwest::Client) -> Self {
    self.ssr_client = Some(client);
    self
  }

  /// An empty `root_template` is accepted here as in [`crate::Inertia::new`];
  /// rendering HTML without one fails.
  pub fn build(self) -> Result<InertiaConfig, InertiaError> {
    let ssr = match (self.ssr_url, self.ssr_client) {
      (None, None) => None,
      (url, client) => {
        let url = url.unwrap_or_else(|| DEFAULT_SSR_URL.to_string());
        Some(SsrClient::with_client(url, client.unwrap_or_default()))
      }
    };

    Ok(InertiaConfig {
      url: self.url,
      root_template: self.root_template,
      version: self.version,
      template_fs: self.template_fs,
      ssr,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_minimal() {
    let config = InertiaConfig::builder()
      .url("https://app.test")
      .root_template("app.html")
      .version("42")
      .build()
      .unwrap();
    assert_eq!(config.url, "https://app.test");
    assert_eq!(config.root_template, "app.html");
    assert_eq!(config.version, "42");
    assert!(config.ssr.is_none());
    assert!(config.template_fs.is_none());
  }

  #[test]
  fn empty_root_template_builds_like_new() {
    let config = InertiaConfig::builder().version("3").build().unwrap();
    assert!(config.root_template.is_empty());
    let inertia = crate::Inertia::from_config(config);
    assert_eq!(inertia.version(), "3");
  }

  #[test]
  fn ssr_url_enables_ssr() {
    let config = InertiaConfig::builder()
      .root_template("app.html")
      .ssr_url("http://ssr.test")
      .build()
      .unwrap();
    assert_eq!(config.ssr.unwrap().url(), "http://ssr.test");
  }

  #[test]
  fn ssr_client_alone_uses_default_address() {
    let config = InertiaConfig::builder()
      .root_template("app.html")
      .ssr_client(reqwest::Client::new())
      .build()
      .unwrap();
    assert_eq!(config.ssr.unwrap().url(), DEFAULT_SSR_URL);
  }
}
