/* src/server/adapter/axum/src/lib.rs */

mod error;
mod extract;
mod middleware;

pub use error::AxumError;
pub use extract::InertiaResponder;
pub use middleware::{InertiaRouterExt, version_gate};

/// Re-export inertia-server core for convenience
pub use inertia_server;

#[cfg(test)]
mod tests;
