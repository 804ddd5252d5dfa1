/* src/server/injector/rust/src/funcs.rs */

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// A named template function: receives the resolved slot value, returns the text to emit.
pub type TemplateFn = Arc<dyn Fn(&Value) -> Result<String, String> + Send + Sync>;

pub type FuncMap = HashMap<String, TemplateFn>;

/// Functions every root template can call: `marshal` and `raw`.
pub fn default_funcs() -> FuncMap {
  let mut funcs: FuncMap = HashMap::new();
  funcs.insert("marshal".to_string(), Arc::new(marshal));
  funcs.insert("raw".to_string(), Arc::new(raw));
  funcs
}

/// JSON-encode the value. Pair with a text slot inside attributes
/// (`data-page="<!--inertia:page|marshal-->"`) so the output is escaped.
pub fn marshal(value: &Value) -> Result<String, String> {
  serde_json::to_string(value).map_err(|e| e.to_string())
}

/// Emit a string verbatim, or join an array of strings with newlines.
pub fn raw(value: &Value) -> Result<String, String> {
  match value {
    Value::String(s) => Ok(s.clone()),
    Value::Array(items) => {
      let mut parts = Vec::with_capacity(items.len());
      for item in items {
        let Value::String(s) = item else {
          return Err("raw expects a string or an array of strings".to_string());
        };
        parts.push(s.as_str());
      }
      Ok(parts.join("\n"))
    }
    _ => Err("raw expects a string or an array of strings".to_string()),
  }
}
