/* src/server/core/rust/src/props.rs */

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::errors::{BoxError, InertiaError, PropError};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Deferred prop computation. Called at most once per render.
pub type PropFn = Arc<dyn Fn() -> BoxFuture<Result<Value, BoxError>> + Send + Sync>;

pub type Props = HashMap<String, Prop>;

/// A page prop: a plain JSON value or a deferred computation.
///
/// `Closure` props are evaluated on every render that keeps them; `Lazy` props
/// are dropped from full renders and only evaluated when a partial reload names
/// them (<https://inertiajs.com/partial-reloads>).
#[derive(Clone)]
pub enum Prop {
  Value(Value),
  Closure(PropFn),
  Lazy(PropFn),
}

impl Prop {
  pub fn closure<F, Fut>(f: F) -> Self
  where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, BoxError>> + Send + 'static,
  {
    Self::Closure(Arc::new(move || Box::pin(f())))
  }

  pub fn lazy<F, Fut>(f: F) -> Self
  where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, BoxError>> + Send + 'static,
  {
    Self::Lazy(Arc::new(move || Box::pin(f())))
  }

  /// Serialize any value into a plain prop.
  pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, InertiaError> {
    Ok(Self::Value(serde_json::to_value(value)?))
  }

  pub fn is_lazy(&self) -> bool {
    matches!(self, Self::Lazy(_))
  }

  /// Evaluate the prop. Plain values pass through unchanged.
  pub async fn resolve(self) -> Result<Value, PropError> {
    match self {
      Self::Value(v) => Ok(v),
      Self::Closure(f) => f().await.map_err(PropError::Closure),
      Self::Lazy(f) => f().await.map_err(PropError::Lazy),
    }
  }
}

impl fmt::Debug for Prop {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
      Self::Closure(_) => f.write_str("Closure(..)"),
      Self::Lazy(_) => f.write_str("Lazy(..)"),
    }
  }
}

impl From<Value> for Prop {
  fn from(value: Value) -> Self {
    Self::Value(value)
  }
}

macro_rules! impl_prop_from {
  ($($ty:ty),* $(,)?) => {
    $(
      impl From<$ty> for Prop {
        fn from(value: $ty) -> Self {
          Self::Value(Value::from(value))
        }
      }
    )*
  };
}

impl_prop_from!(&str, String, bool, i32, i64, u32, u64, f64);

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[tokio::test]
  async fn plain_value_passes_through() {
    assert_eq!(Prop::from("foo").resolve().await.unwrap(), json!("foo"));
  }

  #[tokio::test]
  async fn closure_is_evaluated() {
    let prop = Prop::closure(|| async { Ok::<_, BoxError>(json!("foo")) });
    assert_eq!(prop.resolve().await.unwrap(), json!("foo"));
  }

  #[tokio::test]
  async fn closure_error_is_wrapped() {
    let prop = Prop::closure(|| async { Err::<Value, BoxError>("nothing".into()) });
    let err = prop.resolve().await.unwrap_err();
    assert!(matches!(err, PropError::Closure(_)));
    assert_eq!(err.to_string(), "closure prop resolving: nothing");
  }

  #[tokio::test]
  async fn lazy_is_evaluated_on_demand() {
    let prop = Prop::lazy(|| async { Ok::<_, BoxError>(json!({"n": 1})) });
    assert!(prop.is_lazy());
    assert_eq!(prop.resolve().await.unwrap(), json!({"n": 1}));
  }

  #[tokio::test]
  async fn lazy_error_is_wrapped() {
    let prop = Prop::lazy(|| async { Err::<Value, BoxError>("nothing".into()) });
    let err = prop.resolve().await.unwrap_err();
    assert_eq!(err.to_string(), "lazy prop resolving: nothing");
  }

  #[test]
  fn serialize_struct() {
    #[derive(Serialize)]
    struct User {
      name: &'static str,
    }
    let prop = Prop::serialize(&User { name: "foo" }).unwrap();
    assert!(matches!(prop, Prop::Value(v) if v == json!({"name": "foo"})));
  }

  #[test]
  fn debug_hides_closures() {
    let prop = Prop::lazy(|| async { Ok::<_, BoxError>(Value::Null) });
    assert_eq!(format!("{prop:?}"), "Lazy(..)");
  }
}
