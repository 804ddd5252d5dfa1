/* demo/backend/rust/src/pages/mod.rs */

pub mod dashboard;
pub mod users;

use std::sync::Arc;

use axum::extract::FromRef;
use inertia_server_axum::inertia_server::Inertia;
use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
  pub inertia: Arc<Inertia>,
  pub users: UserStore,
}

impl FromRef<AppState> for Arc<Inertia> {
  fn from_ref(state: &AppState) -> Self {
    state.inertia.clone()
  }
}

impl FromRef<AppState> for UserStore {
  fn from_ref(state: &AppState) -> Self {
    state.users.clone()
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
  pub id: u32,
  pub name: String,
  pub email: String,
}

/// In-memory user list shared across handlers.
#[derive(Clone, Default)]
pub struct UserStore(Arc<RwLock<Vec<User>>>);

impl UserStore {
  pub fn seeded() -> Self {
    let users = [("Alice", "alice@example.com"), ("Bob", "bob@example.com")]
      .into_iter()
      .zip(1..)
      .map(|((name, email), id)| User { id, name: name.into(), email: email.into() })
      .collect();
    Self(Arc::new(RwLock::new(users)))
  }

  pub async fn all(&self) -> Vec<User> {
    self.0.read().await.clone()
  }

  pub async fn find(&self, id: u32) -> Option<User> {
    self.0.read().await.iter().find(|u| u.id == id).cloned()
  }

  pub async fn insert(&self, name: String, email: String) -> User {
    let mut users = self.0.write().await;
    let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
    let user = User { id, name, email };
    users.push(user.clone());
    user
  }

  pub async fn count(&self) -> usize {
    self.0.read().await.len()
  }
}
