/* src/server/injector/rust/src/helpers.rs */

use serde_json::Value;

/// Look up a dotted path such as `page.props.user` in the view data.
pub(crate) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  path.split('.').try_fold(data, |node, key| node.get(key))
}

/// Truthiness for `if` blocks: null, false, zero and empty collections are false.
pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(items) => !items.is_empty(),
    Value::Object(_) => true,
  }
}

/// Text form of a slot value. Strings are emitted unquoted, null as nothing,
/// and composites as compact JSON.
pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

fn entity(ch: char) -> Option<&'static str> {
  Some(match ch {
    '&' => "&amp;",
    '<' => "&lt;",
    '>' => "&gt;",
    '"' => "&quot;",
    '\'' => "&#x27;",
    _ => return None,
  })
}

pub(crate) fn escape_html(s: &str) -> String {
  s.chars().fold(String::with_capacity(s.len()), |mut out, ch| {
    match entity(ch) {
      Some(e) => out.push_str(e),
      None => out.push(ch),
    }
    out
  })
}
