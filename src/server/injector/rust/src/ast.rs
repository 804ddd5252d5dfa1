/* src/server/injector/rust/src/ast.rs */

#[derive(Debug)]
pub(crate) enum Node {
  Text(String),
  Slot(Slot),
  If { path: String, then_nodes: Vec<Node>, else_nodes: Vec<Node> },
  Each { path: String, body: Vec<Node> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotMode {
  /// HTML-escaped output.
  Text,
  /// Verbatim output, selected by a trailing `:html`.
  Html,
}

/// `path`, `path:html`, `path|func` or `path|func:html`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Slot {
  pub path: String,
  pub func: Option<String>,
  pub mode: SlotMode,
}

impl Slot {
  pub(crate) fn parse(directive: &str) -> Self {
    let (body, mode) = match directive.strip_suffix(":html") {
      Some(body) => (body, SlotMode::Html),
      None => (directive, SlotMode::Text),
    };
    let (path, func) = match body.split_once('|') {
      Some((path, func)) => (path, Some(func.trim().to_string())),
      None => (body, None),
    };
    Self { path: path.trim().to_string(), func, mode }
  }
}
