/* src/server/injector/rust/src/lib.rs */

//! Root-template engine for the Inertia adapter.
//!
//! Templates are plain HTML with comment markers:
//!
//! ```html
//! <head><!--inertia:if:ssr--><!--inertia:ssr.head|raw:html--><!--inertia:endif:ssr--></head>
//! <div id="app" data-page="<!--inertia:page|marshal-->"></div>
//! ```

mod ast;
mod error;
mod funcs;
mod helpers;
mod parser;
mod render;
mod token;

pub use error::TemplateError;
pub use funcs::{FuncMap, TemplateFn, default_funcs, marshal, raw};
pub use parser::{DiagnosticKind, ParseDiagnostic};

use std::borrow::Cow;

use parser::parse_with_diagnostics;
use serde_json::Value;
use token::tokenize;

/// Parse `template` and render it against `data`.
///
/// Any parse diagnostic (orphan block close, unclosed block) fails the whole render,
/// as does calling an unknown or failing function.
pub fn render_template(
  template: &str,
  data: &Value,
  funcs: &FuncMap,
) -> Result<String, TemplateError> {
  let (html, diagnostics) = render_with_diagnostics(template, data, funcs)?;
  if let Some(diag) = diagnostics.into_iter().next() {
    return Err(TemplateError::Parse { kind: diag.kind, directive: diag.directive });
  }
  Ok(html)
}

/// Best-effort render that reports parse diagnostics instead of failing on them.
pub fn render_with_diagnostics(
  template: &str,
  data: &Value,
  funcs: &FuncMap,
) -> Result<(String, Vec<ParseDiagnostic>), TemplateError> {
  let clean: Cow<'_, str> = if template.contains('\0') {
    Cow::Owned(template.replace('\0', ""))
  } else {
    Cow::Borrowed(template)
  };
  let mut diagnostics = Vec::new();
  let nodes = parse_with_diagnostics(tokenize(&clean), &mut diagnostics);
  let html = render::render(&nodes, data, funcs)?;
  Ok((html, diagnostics))
}

#[cfg(test)]
mod tests;
