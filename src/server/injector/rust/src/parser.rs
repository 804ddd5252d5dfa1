/* src/server/injector/rust/src/parser.rs */

use std::fmt;

use crate::ast::{Node, Slot};
use crate::token::Token;

/// Diagnostic emitted when block directives are mismatched or unclosed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
  pub kind: DiagnosticKind,
  pub directive: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
  /// `else`, `endif:x` or `endeach` with no matching open block
  UnmatchedBlockClose,
  /// `if:x` or `each:x` still open at end of input
  UnclosedBlock,
}

impl fmt::Display for DiagnosticKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnmatchedBlockClose => f.write_str("unmatched block close"),
      Self::UnclosedBlock => f.write_str("unclosed block"),
    }
  }
}

/// An open block waiting for its close directive.
enum Frame {
  If { path: String, then_nodes: Vec<Node>, else_nodes: Option<Vec<Node>> },
  Each { path: String, body: Vec<Node> },
}

impl Frame {
  fn nodes_mut(&mut self) -> &mut Vec<Node> {
    match self {
      Self::If { then_nodes, else_nodes, .. } => else_nodes.as_mut().unwrap_or(then_nodes),
      Self::Each { body, .. } => body,
    }
  }

  fn directive(&self) -> String {
    match self {
      Self::If { path, .. } => format!("if:{path}"),
      Self::Each { path, .. } => format!("each:{path}"),
    }
  }

  fn into_node(self) -> Node {
    match self {
      Self::If { path, then_nodes, else_nodes } => {
        Node::If { path, then_nodes, else_nodes: else_nodes.unwrap_or_default() }
      }
      Self::Each { path, body } => Node::Each { path, body },
    }
  }
}

struct Parser<'d> {
  root: Vec<Node>,
  open: Vec<Frame>,
  diagnostics: &'d mut Vec<ParseDiagnostic>,
}

impl Parser<'_> {
  fn target(&mut self) -> &mut Vec<Node> {
    match self.open.last_mut() {
      Some(frame) => frame.nodes_mut(),
      None => &mut self.root,
    }
  }

  fn close_top(&mut self) {
    if let Some(frame) = self.open.pop() {
      let node = frame.into_node();
      self.target().push(node);
    }
  }

  fn unmatched(&mut self, directive: &str) {
    self.diagnostics.push(ParseDiagnostic {
      kind: DiagnosticKind::UnmatchedBlockClose,
      directive: directive.to_string(),
    });
  }

  fn directive(&mut self, directive: &str) {
    if let Some(path) = directive.strip_prefix("if:") {
      self.open.push(Frame::If { path: path.into(), then_nodes: Vec::new(), else_nodes: None });
    } else if let Some(path) = directive.strip_prefix("each:") {
      self.open.push(Frame::Each { path: path.into(), body: Vec::new() });
    } else if directive == "else" {
      match self.open.last_mut() {
        Some(Frame::If { else_nodes, .. }) if else_nodes.is_none() => {
          *else_nodes = Some(Vec::new());
        }
        _ => self.unmatched(directive),
      }
    } else if let Some(path) = directive.strip_prefix("endif:") {
      match self.open.last() {
        Some(Frame::If { path: open, .. }) if open == path => self.close_top(),
        _ => self.unmatched(directive),
      }
    } else if directive == "endeach" {
      match self.open.last() {
        Some(Frame::Each { .. }) => self.close_top(),
        _ => self.unmatched(directive),
      }
    } else {
      let slot = Slot::parse(directive);
      self.target().push(Node::Slot(slot));
    }
  }

  fn finish(mut self) -> Vec<Node> {
    while let Some(frame) = self.open.last() {
      let directive = frame.directive();
      self.diagnostics.push(ParseDiagnostic { kind: DiagnosticKind::UnclosedBlock, directive });
      self.close_top();
    }
    self.root
  }
}

/// Build the node tree. Mismatched directives are reported and skipped;
/// unclosed blocks are reported and closed at end of input.
pub(crate) fn parse_with_diagnostics<'a>(
  tokens: impl IntoIterator<Item = Token<'a>>,
  diagnostics: &mut Vec<ParseDiagnostic>,
) -> Vec<Node> {
  let mut parser = Parser { root: Vec::new(), open: Vec::new(), diagnostics };
  for token in tokens {
    match token {
      Token::Text(text) => parser.target().push(Node::Text(text.to_string())),
      Token::Directive(directive) => parser.directive(directive),
    }
  }
  parser.finish()
}
