/* src/server/core/rust/src/template.rs */

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Source of root templates, looked up by name.
///
/// Without one, the root template name is read as a filesystem path.
pub trait TemplateFs: Send + Sync {
  fn read(&self, name: &str) -> io::Result<String>;
}

/// A directory on disk; names are relative to it.
impl TemplateFs for PathBuf {
  fn read(&self, name: &str) -> io::Result<String> {
    std::fs::read_to_string(self.join(name))
  }
}

/// Embedded templates keyed by name, e.g. built from `include_str!`.
impl TemplateFs for HashMap<String, String> {
  fn read(&self, name: &str) -> io::Result<String> {
    let missing =
      || io::Error::new(io::ErrorKind::NotFound, format!("template `{name}` not found"));
    self.get(name).cloned().ok_or_else(missing)
  }
}

pub(crate) fn load(fs: Option<&dyn TemplateFs>, name: &str) -> io::Result<String> {
  match fs {
    Some(fs) => fs.read(name),
    None => std::fs::read_to_string(name),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_lookup() {
    let fs = HashMap::from([("app.html".to_string(), "<html></html>".to_string())]);
    assert_eq!(load(Some(&fs as &dyn TemplateFs), "app.html").unwrap(), "<html></html>");
  }

  #[test]
  fn embedded_missing_is_not_found() {
    let fs: HashMap<String, String> = HashMap::new();
    let err = load(Some(&fs as &dyn TemplateFs), "nope.html").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }

  #[test]
  fn directory_lookup() {
    let dir = std::env::temp_dir().join(format!("inertia-template-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("root.html"), "root").unwrap();
    assert_eq!(load(Some(&dir as &dyn TemplateFs), "root.html").unwrap(), "root");
    assert_eq!(load(None, dir.join("root.html").to_str().unwrap()).unwrap(), "root");
    std::fs::remove_dir_all(&dir).unwrap();
  }
}
