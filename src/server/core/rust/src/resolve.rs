/* src/server/core/rust/src/resolve.rs */

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::errors::InertiaError;
use crate::props::Props;
use crate::request::InertiaRequest;

/// Keys a partial reload asks for. Empty means "no restriction".
///
/// Tokens are split on `,` and not trimmed. A present but empty header counts
/// as no restriction; a header holding only separators yields empty tokens that
/// match no key, so every prop is dropped.
pub fn only_keys(req: &InertiaRequest, component: &str) -> HashSet<String> {
  let partial_data = req.partial_data();
  if partial_data.is_empty() || !req.is_partial_for(component) {
    return HashSet::new();
  }
  partial_data.split(',').map(str::to_string).collect()
}

/// Merge shared, explicit and ambient props, filter them for the request and
/// evaluate whatever survives.
///
/// Precedence is shared < explicit < ambient. On a partial reload for
/// `component` only the requested keys are kept (lazy ones included); on a full
/// render lazy props are dropped.
pub async fn prepare_props(
  req: &InertiaRequest,
  shared: &Props,
  component: &str,
  explicit: Props,
) -> Result<Map<String, Value>, InertiaError> {
  let mut props = explicit;

  for (key, value) in shared {
    props.entry(key.clone()).or_insert_with(|| value.clone());
  }

  for (key, value) in req.context.props() {
    props.insert(key.clone(), value.clone());
  }

  let only = only_keys(req, component);
  if only.is_empty() {
    props.retain(|_, prop| !prop.is_lazy());
  } else {
    tracing::debug!(component, keys = ?only, "partial reload");
    props.retain(|key, _| only.contains(key.as_str()));
  }

  let mut resolved = Map::new();
  for (key, prop) in props {
    let value = prop
      .resolve()
      .await
      .map_err(|source| InertiaError::ResolveProp { key: key.clone(), source })?;
    resolved.insert(key, value);
  }

  Ok(resolved)
}
