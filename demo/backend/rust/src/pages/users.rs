/* demo/backend/rust/src/pages/users.rs */

use axum::Form;
use axum::extract::{Path, State};
use axum::response::Response;
use inertia_server_axum::inertia_server::{Prop, Props};
use inertia_server_axum::{AxumError, InertiaResponder};
use serde::Deserialize;

use super::UserStore;

pub async fn index(
  State(users): State<UserStore>,
  inertia: InertiaResponder,
) -> Result<Response, AxumError> {
  let props = Props::from([("users".to_string(), Prop::serialize(&users.all().await)?)]);
  inertia.render("Users/Index", props).await
}

pub async fn show(
  State(users): State<UserStore>,
  Path(id): Path<u32>,
  inertia: InertiaResponder,
) -> Result<Response, AxumError> {
  match users.find(id).await {
    Some(user) => {
      let props = Props::from([("user".to_string(), Prop::serialize(&user)?)]);
      inertia.render("Users/Show", props).await
    }
    None => inertia.location("/users"),
  }
}

#[derive(Deserialize)]
pub struct NewUser {
  name: String,
  email: String,
}

/// Invalid input goes back to the form; success lands on the new user.
pub async fn store(
  State(users): State<UserStore>,
  inertia: InertiaResponder,
  Form(input): Form<NewUser>,
) -> Result<Response, AxumError> {
  if input.name.trim().is_empty() || !input.email.contains('@') {
    tracing::info!("rejected user form");
    return inertia.back();
  }
  let user = users.insert(input.name, input.email).await;
  tracing::info!(id = user.id, "user created");
  inertia.location(&format!("/users/{}", user.id))
}
