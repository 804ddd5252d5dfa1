/* src/server/injector/rust/src/tests/mod.rs */

use super::*;
use serde_json::json;


#[test]
fn plain_slot_escapes_html() {
  let html = render_template("<p><!--inertia:msg--></p>", &json!({"msg": "<b>"}), &default_funcs());
  assert_eq!(html.unwrap(), "<p>&lt;b&gt;</p>");
}

#[test]
fn html_slot_is_verbatim() {
  let data = json!({"msg": "<b>hi</b>"});
  let html = render_template("<p><!--inertia:msg:html--></p>", &data, &default_funcs());
  assert_eq!(html.unwrap(), "<p><b>hi</b></p>");
}

#[test]
fn missing_path_renders_empty() {
  let html = render_template("[<!--inertia:nope-->]", &json!({}), &default_funcs());
  assert_eq!(html.unwrap(), "[]");
}

#[test]
fn nested_path_resolves() {
  let data = json!({"page": {"props": {"user": {"name": "foo"}}}});
  let html = render_template("<!--inertia:page.props.user.name-->", &data, &default_funcs());
  assert_eq!(html.unwrap(), "foo");
}

#[test]
fn each_exposes_dollar_scope() {
  let data = json!({"links": [{"href": "/a"}, {"href": "/b"}]});
  let tmpl = "<!--inertia:each:links--><a><!--inertia:$.href--></a><!--inertia:endeach-->";
  assert_eq!(render_template(tmpl, &data, &default_funcs()).unwrap(), "<a>/a</a><a>/b</a>");
}

#[test]
fn unknown_function_is_execute_error() {
  let err = render_template("<!--inertia:x|shout-->", &json!({"x": "a"}), &default_funcs());
  assert_eq!(err.unwrap_err(), TemplateError::UnknownFunc("shout".into()));
}

#[test]
fn failing_function_surfaces_message() {
  let err = render_template("<!--inertia:x|raw:html-->", &json!({"x": 7}), &default_funcs());
  assert!(matches!(err.unwrap_err(), TemplateError::Func { name, .. } if name == "raw"));
}

#[test]
fn unclosed_block_is_parse_error() {
  let err = render_template("<!--inertia:if:x-->open", &json!({"x": true}), &default_funcs());
  assert_eq!(
    err.unwrap_err(),
    TemplateError::Parse { kind: DiagnosticKind::UnclosedBlock, directive: "if:x".into() }
  );
}

#[test]
fn diagnostics_mode_renders_best_effort() {
  let (html, diags) =
    render_with_diagnostics("a<!--inertia:endeach-->b", &json!({}), &default_funcs()).unwrap();
  assert_eq!(html, "ab");
  assert_eq!(diags.len(), 1);
}

#[test]
fn custom_function_applies() {
  let mut funcs = default_funcs();
  let asset: TemplateFn = std::sync::Arc::new(|v: &serde_json::Value| {
    Ok::<_, String>(format!("/build/{}", v.as_str().unwrap_or("")))
  });
  funcs.insert("asset".into(), asset);
  let html = render_template("<!--inertia:entry|asset-->", &json!({"entry": "app.js"}), &funcs);
  assert_eq!(html.unwrap(), "/build/app.js");
}

#[test]
fn null_bytes_are_stripped() {
  let html = render_template("a\0b", &json!({}), &default_funcs());
  assert_eq!(html.unwrap(), "ab");
}
