/* src/server/injector/rust/src/render.rs */

use serde_json::Value;

use crate::ast::{Node, Slot, SlotMode};
use crate::error::TemplateError;
use crate::funcs::FuncMap;
use crate::helpers::{escape_html, is_truthy, resolve, stringify};

struct Renderer<'f> {
  funcs: &'f FuncMap,
  out: String,
}

impl Renderer<'_> {
  fn nodes(&mut self, nodes: &[Node], data: &Value) -> Result<(), TemplateError> {
    for node in nodes {
      match node {
        Node::Text(text) => self.out.push_str(text),
        Node::Slot(slot) => self.slot(slot, data)?,
        Node::If { path, then_nodes, else_nodes } => {
          let truthy = resolve(path, data).is_some_and(is_truthy);
          self.nodes(if truthy { then_nodes } else { else_nodes }, data)?;
        }
        Node::Each { path, body } => {
          let Some(Value::Array(items)) = resolve(path, data) else { continue };
          for item in items {
            self.nodes(body, &scoped(data, item))?;
          }
        }
      }
    }
    Ok(())
  }

  fn slot(&mut self, slot: &Slot, data: &Value) -> Result<(), TemplateError> {
    let value = resolve(&slot.path, data).unwrap_or(&Value::Null);
    let text = match &slot.func {
      Some(name) => {
        let f = self.funcs.get(name).ok_or_else(|| TemplateError::UnknownFunc(name.clone()))?;
        f(value).map_err(|message| TemplateError::Func { name: name.clone(), message })?
      }
      None => stringify(value),
    };
    match slot.mode {
      SlotMode::Html => self.out.push_str(&text),
      SlotMode::Text => self.out.push_str(&escape_html(&text)),
    }
    Ok(())
  }
}

/// View data for one `each` iteration: `$` is the item, `$$` the enclosing item.
fn scoped(data: &Value, item: &Value) -> Value {
  let Value::Object(map) = data else {
    return data.clone();
  };
  let mut map = map.clone();
  if let Some(outer) = map.remove("$") {
    map.insert("$$".to_string(), outer);
  }
  map.insert("$".to_string(), item.clone());
  Value::Object(map)
}

pub(crate) fn render(
  nodes: &[Node],
  data: &Value,
  funcs: &FuncMap,
) -> Result<String, TemplateError> {
  let mut renderer = Renderer { funcs, out: String::new() };
  renderer.nodes(nodes, data)?;
  Ok(renderer.out)
}
