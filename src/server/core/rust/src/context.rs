/* src/server/core/rust/src/context.rs */

use axum::http::Request;
use axum::http::request::Parts;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::InertiaError;
use crate::props::{Prop, Props};

/// Request-scoped Inertia state, stored in the request extensions.
///
/// `props` are merged over shared and explicit props at render time;
/// `view_data` only reaches the root template.
#[derive(Debug, Clone, Default)]
pub struct InertiaContext {
  props: Props,
  view_data: Map<String, Value>,
}

impl InertiaContext {
  pub fn props(&self) -> &Props {
    &self.props
  }

  pub fn view_data(&self) -> &Map<String, Value> {
    &self.view_data
  }

  pub fn insert_prop(&mut self, key: impl Into<String>, prop: impl Into<Prop>) {
    self.props.insert(key.into(), prop.into());
  }

  pub fn extend_props(&mut self, props: Props) {
    self.props.extend(props);
  }

  /// Merge a serializable struct as props. It must serialize to a JSON object.
  pub fn merge_props<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), InertiaError> {
    let Value::Object(map) = serde_json::to_value(value)? else {
      return Err(InertiaError::InvalidContextProps);
    };
    self.props.extend(map.into_iter().map(|(k, v)| (k, Prop::Value(v))));
    Ok(())
  }

  pub fn insert_view_data(&mut self, key: impl Into<String>, value: Value) {
    self.view_data.insert(key.into(), value);
  }

  /// Merge a serializable struct as view data. It must serialize to a JSON object.
  pub fn merge_view_data<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), InertiaError> {
    let Value::Object(map) = serde_json::to_value(value)? else {
      return Err(InertiaError::InvalidContextViewData);
    };
    self.view_data.extend(map);
    Ok(())
  }
}

/// Attach Inertia props and view data to anything carrying request extensions.
///
/// Calls accumulate: each one updates the same [`InertiaContext`].
pub trait InertiaContextExt {
  fn inertia_context_mut(&mut self) -> &mut InertiaContext;

  fn with_inertia_prop(&mut self, key: impl Into<String>, prop: impl Into<Prop>) -> &mut Self {
    self.inertia_context_mut().insert_prop(key, prop);
    self
  }

  fn with_inertia_props(&mut self, props: Props) -> &mut Self {
    self.inertia_context_mut().extend_props(props);
    self
  }

  fn with_inertia_view_data(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
    self.inertia_context_mut().insert_view_data(key, value);
    self
  }

  fn try_with_inertia_props<T: Serialize + ?Sized>(
    &mut self,
    value: &T,
  ) -> Result<&mut Self, InertiaError> {
    self.inertia_context_mut().merge_props(value)?;
    Ok(self)
  }

  fn try_with_inertia_view_data<T: Serialize + ?Sized>(
    &mut self,
    value: &T,
  ) -> Result<&mut Self, InertiaError> {
    self.inertia_context_mut().merge_view_data(value)?;
    Ok(self)
  }
}

impl<B> InertiaContextExt for Request<B> {
  fn inertia_context_mut(&mut self) -> &mut InertiaContext {
    self.extensions_mut().get_or_insert_default::<InertiaContext>()
  }
}

impl InertiaContextExt for Parts {
  fn inertia_context_mut(&mut self) -> &mut InertiaContext {
    self.extensions.get_or_insert_default::<InertiaContext>()
  }
}
