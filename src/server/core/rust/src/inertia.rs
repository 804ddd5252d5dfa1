/* src/server/core/rust/src/inertia.rs */

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Response, StatusCode, header};
use inertia_injector::{FuncMap, default_funcs, render_template};
use serde_json::Value;

use crate::config::InertiaConfig;
use crate::errors::InertiaError;
use crate::headers;
use crate::page::Page;
use crate::props::{Prop, Props};
use crate::request::InertiaRequest;
use crate::resolve::prepare_props;
use crate::ssr::{DEFAULT_SSR_URL, SsrClient};
use crate::template::{self, TemplateFs};

/// Outcome of the asset-version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
  Pass,
  /// Stale client: answer with [`conflict_response`] pointing at `location`.
  Block { location: String },
}

/// Inertia adapter instance.
///
/// Configure it with `&mut self` (shared props, template functions, SSR) and
/// then wrap it in an `Arc` to serve requests.
pub struct Inertia {
  url: String,
  root_template: String,
  version: String,
  shared_props: Props,
  shared_funcs: FuncMap,
  template_fs: Option<Arc<dyn TemplateFs>>,
  ssr: Option<SsrClient>,
}

impl Inertia {
  /// Root template is read from disk by path.
  pub fn new(
    url: impl Into<String>,
    root_template: impl Into<String>,
    version: impl Into<String>,
  ) -> Self {
    Self {
      url: url.into(),
      root_template: root_template.into(),
      version: version.into(),
      shared_props: Props::new(),
      shared_funcs: default_funcs(),
      template_fs: None,
      ssr: None,
    }
  }

  /// Root template is looked up in `fs`.
  pub fn with_fs(
    url: impl Into<String>,
    root_template: impl Into<String>,
    version: impl Into<String>,
    fs: impl TemplateFs + 'static,
  ) -> Self {
    let mut inertia = Self::new(url, root_template, version);
    inertia.template_fs = Some(Arc::new(fs));
    inertia
  }

  pub fn from_config(config: InertiaConfig) -> Self {
    let mut inertia = Self::new(config.url, config.root_template, config.version);
    inertia.template_fs = config.template_fs;
    inertia.ssr = config.ssr;
    inertia
  }

  // -- Administration --

  /// Add a prop sent with every page. Later calls for the same key win.
  pub fn share(&mut self, key: impl Into<String>, prop: impl Into<Prop>) {
    self.shared_props.insert(key.into(), prop.into());
  }

  /// Register a function callable from the root template as `path|name`.
  pub fn share_func<F>(&mut self, name: impl Into<String>, f: F)
  where
    F: Fn(&Value) -> Result<String, String> + Send + Sync + 'static,
  {
    self.shared_funcs.insert(name.into(), Arc::new(f));
  }

  pub fn enable_ssr(&mut self, url: impl Into<String>) {
    self.ssr = Some(SsrClient::new(url));
  }

  pub fn enable_ssr_with_client(&mut self, url: impl Into<String>, client: reqwest::Client) {
    self.ssr = Some(SsrClient::with_client(url, client));
  }

  pub fn enable_ssr_with_default(&mut self) {
    self.enable_ssr(DEFAULT_SSR_URL);
  }

  pub fn disable_ssr(&mut self) {
    self.ssr = None;
  }

  pub fn is_ssr_enabled(&self) -> bool {
    self.ssr.is_some()
  }

  pub fn ssr_url(&self) -> Option<&str> {
    self.ssr.as_ref().map(SsrClient::url)
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  pub fn shared_props(&self) -> &Props {
    &self.shared_props
  }

  pub fn shared_funcs(&self) -> &FuncMap {
    &self.shared_funcs
  }

  // -- Responses --

  /// Render `component`: page JSON for protocol requests, the root template
  /// otherwise.
  #[tracing::instrument(skip_all, fields(component = %component))]
  pub async fn render(
    &self,
    req: &InertiaRequest,
    component: &str,
    props: Props,
  ) -> Result<Response<Body>, InertiaError> {
    let props = prepare_props(req, &self.shared_props, component, props).await?;
    let page = Page {
      component: component.to_string(),
      props,
      url: req.request_uri().to_string(),
      version: self.version.clone(),
    };

    if req.is_inertia() {
      tracing::debug!("page json");
      return json_response(&page);
    }
    tracing::debug!(ssr = self.ssr.is_some(), "root template");
    self.html_response(req, &page).await
  }

  async fn html_response(
    &self,
    req: &InertiaRequest,
    page: &Page,
  ) -> Result<Response<Body>, InertiaError> {
    if self.root_template.is_empty() {
      return Err(InertiaError::Config("root template not set".to_string()));
    }

    let mut view_data = req.context.view_data().clone();
    view_data.insert("page".to_string(), serde_json::to_value(page)?);

    let ssr = match &self.ssr {
      Some(client) => serde_json::to_value(client.render(page).await?)?,
      None => Value::Null,
    };
    view_data.insert("ssr".to_string(), ssr);

    let source = template::load(self.template_fs.as_deref(), &self.root_template).map_err(
      |source| InertiaError::TemplateRead { name: self.root_template.clone(), source },
    )?;
    let html = render_template(&source, &Value::Object(view_data), &self.shared_funcs)?;

    let mut resp = Response::new(Body::from(html));
    resp.headers_mut().insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
    Ok(resp)
  }

  /// Redirect to `url`. Protocol requests get a 409 so the client performs a
  /// full page visit; others get 303 after POST/PUT/PATCH and 302 otherwise.
  pub fn location(&self, req: &InertiaRequest, url: &str) -> Result<Response<Body>, InertiaError> {
    if req.is_inertia() {
      return conflict_response(url);
    }

    let status = if matches!(req.method, Method::POST | Method::PUT | Method::PATCH) {
      StatusCode::SEE_OTHER
    } else {
      StatusCode::FOUND
    };
    let mut resp = Response::new(Body::empty());
    *resp.status_mut() = status;
    resp.headers_mut().insert(header::LOCATION, HeaderValue::from_str(url)?);
    Ok(resp)
  }

  /// Redirect to the `Referer`, or to the current request target without one.
  pub fn back(&self, req: &InertiaRequest) -> Result<Response<Body>, InertiaError> {
    match req.referer() {
      Some(referer) => self.location(req, &referer),
      None => self.location(req, req.request_uri()),
    }
  }

  /// Compare the client's asset version with ours. Only protocol GET requests
  /// are ever blocked.
  pub fn version_gate(&self, req: &InertiaRequest) -> Gate {
    if !req.is_inertia() || req.method != Method::GET {
      return Gate::Pass;
    }

    if req.version_matches(&self.version) {
      return Gate::Pass;
    }

    let client = req.client_version().unwrap_or_default();
    tracing::debug!(client = %client, server = %self.version, "asset version mismatch");
    Gate::Block { location: format!("{}{}", self.url, req.request_uri()) }
  }
}

fn json_response(page: &Page) -> Result<Response<Body>, InertiaError> {
  let body = serde_json::to_vec(page)?;
  let mut resp = Response::new(Body::from(body));
  let h = resp.headers_mut();
  h.insert(header::VARY, HeaderValue::from_static("Accept"));
  h.insert(headers::INERTIA, HeaderValue::from_static("true"));
  h.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
  Ok(resp)
}

/// 409 Conflict carrying `X-Inertia-Location`.
pub fn conflict_response(location: &str) -> Result<Response<Body>, InertiaError> {
  let mut resp = Response::new(Body::empty());
  *resp.status_mut() = StatusCode::CONFLICT;
  resp.headers_mut().insert(headers::LOCATION, HeaderValue::from_str(location)?);
  Ok(resp)
}
