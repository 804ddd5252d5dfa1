/* src/server/adapter/axum/src/tests/mod.rs */


use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use inertia_server::Inertia;

pub(super) fn shared(version: &str) -> Arc<Inertia> {
  let mut inertia = Inertia::with_fs(
    "https://app.test",
    "app.html",
    version,
    std::collections::HashMap::from([(
      "app.html".to_string(),
      "<div id=\"app\" data-page=\"<!--inertia:page|marshal-->\"></div>".to_string(),
    )]),
  );
  inertia.share("appName", "demo");
  Arc::new(inertia)
}

pub(super) fn get(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
  let mut builder = Request::builder().method("GET").uri(uri);
  for (k, v) in headers {
    builder = builder.header(*k, *v);
  }
  builder.body(Body::empty()).unwrap()
}

pub(super) async fn body_string(resp: Response) -> String {
  let bytes = resp.into_body().collect().await.unwrap().to_bytes();
  String::from_utf8(bytes.to_vec()).unwrap()
}
