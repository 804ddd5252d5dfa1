/* src/server/injector/rust/src/token.rs */

pub(crate) const MARKER_OPEN: &str = "<!--inertia:";
pub(crate) const MARKER_CLOSE: &str = "-->";

/// A slice of the template: literal HTML or the trimmed body of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
  Text(&'a str),
  Directive(&'a str),
}

pub(crate) struct Tokens<'a> {
  rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
  type Item = Token<'a>;

  fn next(&mut self) -> Option<Token<'a>> {
    if self.rest.is_empty() {
      return None;
    }
    let Some(start) = self.rest.find(MARKER_OPEN) else {
      return Some(Token::Text(std::mem::take(&mut self.rest)));
    };
    if start > 0 {
      let (text, rest) = self.rest.split_at(start);
      self.rest = rest;
      return Some(Token::Text(text));
    }

    let body = &self.rest[MARKER_OPEN.len()..];
    match body.find(MARKER_CLOSE) {
      Some(end) => {
        self.rest = &body[end + MARKER_CLOSE.len()..];
        Some(Token::Directive(body[..end].trim()))
      }
      // unterminated marker: the remainder is plain text
      None => Some(Token::Text(std::mem::take(&mut self.rest))),
    }
  }
}

pub(crate) fn tokenize(template: &str) -> Tokens<'_> {
  Tokens { rest: template }
}

#[cfg(test)]
mod tests {
  use super::Token::{Directive, Text};
  use super::*;

  fn tokens(src: &str) -> Vec<Token<'_>> {
    tokenize(src).collect()
  }

  #[test]
  fn empty_template_has_no_tokens() {
    assert!(tokens("").is_empty());
  }

  #[test]
  fn plain_html_is_one_text() {
    assert_eq!(tokens("<p>hello</p>"), [Text("<p>hello</p>")]);
  }

  #[test]
  fn directive_between_text() {
    assert_eq!(tokens("head<!--inertia:x-->tail"), [Text("head"), Directive("x"), Text("tail")]);
  }

  #[test]
  fn adjacent_directives() {
    assert_eq!(tokens("<!--inertia:a--><!--inertia:b-->"), [Directive("a"), Directive("b")]);
  }

  #[test]
  fn directive_body_is_trimmed() {
    assert_eq!(tokens("<!--inertia: page|marshal -->"), [Directive("page|marshal")]);
  }

  #[test]
  fn unterminated_marker_is_text() {
    assert_eq!(tokens("a<!--inertia:x"), [Text("a"), Text("<!--inertia:x")]);
  }

  #[test]
  fn ordinary_comments_pass_through() {
    assert_eq!(tokens("<!-- note -->"), [Text("<!-- note -->")]);
  }
}
