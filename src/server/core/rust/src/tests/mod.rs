/* src/server/core/rust/src/tests/mod.rs */


use std::collections::HashMap;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Method, Response, Uri};
use http_body_util::BodyExt;

use crate::{InertiaContext, InertiaRequest};

pub(super) const APP: &str = concat!(
  "<html><head><!--inertia:if:ssr--><!--inertia:ssr.head|raw:html--><!--inertia:endif:ssr-->",
  "<title><!--inertia:title--></title></head>",
  "<body><!--inertia:if:ssr--><!--inertia:ssr.body:html-->",
  "<!--inertia:else--><div id=\"app\" data-page=\"<!--inertia:page|marshal-->\"></div>",
  "<!--inertia:endif:ssr--></body></html>",
);

pub(super) fn templates() -> HashMap<String, String> {
  HashMap::from([("app.html".to_string(), APP.to_string())])
}

pub(super) fn request(
  method: Method,
  target: &'static str,
  pairs: &[(&'static str, &'static str)],
) -> InertiaRequest {
  request_with(method, target, pairs, InertiaContext::default())
}

pub(super) fn request_with(
  method: Method,
  target: &'static str,
  pairs: &[(&'static str, &'static str)],
  ctx: InertiaContext,
) -> InertiaRequest {
  let mut headers = HeaderMap::new();
  for (k, v) in pairs {
    headers.insert(*k, HeaderValue::from_bytes(v.as_bytes()).unwrap());
  }
  InertiaRequest::new(method, Uri::from_static(target), headers).with_context(ctx)
}

pub(super) async fn body_string(resp: Response<Body>) -> String {
  let bytes = resp.into_body().collect().await.unwrap().to_bytes();
  String::from_utf8(bytes.to_vec()).unwrap()
}

pub(super) fn header<'a>(resp: &'a Response<Body>, name: &str) -> Option<&'a str> {
  resp.headers().get(name).and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
}
