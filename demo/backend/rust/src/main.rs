/* demo/backend/rust/src/main.rs */

mod pages;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use inertia_server_axum::InertiaRouterExt;
use inertia_server_axum::inertia_server::{Inertia, InertiaConfig};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use pages::{AppState, UserStore};

const ASSET_VERSION: &str = "1";

fn build_inertia() -> Result<Inertia, Box<dyn std::error::Error>> {
  let template_dir = env::var("TEMPLATE_DIR")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"));
  let app_url = env::var("APP_URL").unwrap_or_default();

  let mut builder = InertiaConfig::builder()
    .url(app_url)
    .root_template("app.html")
    .version(ASSET_VERSION)
    .template_fs(template_dir);
  if let Ok(ssr_url) = env::var("INERTIA_SSR_URL") {
    builder = builder.ssr_url(ssr_url);
  }

  let mut inertia = Inertia::from_config(builder.build()?);
  inertia.share("appName", "Inertia demo");
  inertia.share_func("asset", |version: &Value| {
    Ok(format!("/build/app.js?v={}", version.as_str().unwrap_or_default()))
  });
  Ok(inertia)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info,inertia_server=debug"));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let inertia = Arc::new(build_inertia()?);
  if let Some(url) = inertia.ssr_url() {
    tracing::info!(%url, "server-side rendering enabled");
  }

  let state = AppState { inertia: inertia.clone(), users: UserStore::seeded() };
  let app = Router::new()
    .route("/", get(pages::dashboard::show))
    .route("/users", get(pages::users::index).post(pages::users::store))
    .route("/users/{id}", get(pages::users::show))
    .inertia_version_gate(inertia)
    .with_state(state);

  let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
  let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
  tracing::info!(port = listener.local_addr()?.port(), "inertia demo listening");
  axum::serve(listener, app).await?;
  Ok(())
}
