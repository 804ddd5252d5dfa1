/* src/server/core/rust/src/page.rs */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The page object exchanged with the client runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
  pub component: String,
  pub props: Map<String, Value>,
  pub url: String,
  pub version: String,
}

/// Pre-rendered markup returned by the SSR service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsrResponse {
  #[serde(default)]
  pub head: Vec<String>,
  #[serde(default)]
  pub body: String,
}
