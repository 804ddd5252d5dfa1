/* src/server/injector/rust/src/error.rs */

use thiserror::Error;

use crate::parser::DiagnosticKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
  #[error("template parse: {kind} `{directive}`")]
  Parse { kind: DiagnosticKind, directive: String },

  #[error("template execute: function `{0}` not defined")]
  UnknownFunc(String),

  #[error("template execute: {name}: {message}")]
  Func { name: String, message: String },
}
