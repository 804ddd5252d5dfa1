/* demo/backend/rust/src/pages/dashboard.rs */

use axum::extract::State;
use axum::response::Response;
use inertia_server_axum::inertia_server::{BoxError, Prop, Props};
use inertia_server_axum::{AxumError, InertiaResponder};
use serde_json::json;

use super::UserStore;

/// `stats` is lazy: only sent when the client asks for it with a partial reload.
pub async fn show(
  State(users): State<UserStore>,
  inertia: InertiaResponder,
) -> Result<Response, AxumError> {
  let store = users.clone();
  let props = Props::from([
    ("greeting".to_string(), Prop::from("Welcome back")),
    (
      "stats".to_string(),
      Prop::lazy(move || {
        let store = store.clone();
        async move { Ok::<_, BoxError>(json!({ "users": store.count().await })) }
      }),
    ),
  ]);
  inertia.render("Dashboard", props).await
}
