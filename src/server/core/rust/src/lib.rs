/* src/server/core/rust/src/lib.rs */

//! Server-side Inertia.js protocol: prop resolution, page rendering, SSR,
//! redirects and asset-version gating, on `http` types.

pub mod config;
pub mod context;
pub mod errors;
pub mod headers;
pub mod inertia;
pub mod page;
pub mod props;
pub mod request;
pub mod resolve;
pub mod ssr;
pub mod template;

pub use config::{InertiaConfig, InertiaConfigBuilder};
pub use context::{InertiaContext, InertiaContextExt};
pub use errors::{BoxError, InertiaError, PropError};
pub use inertia::{Gate, Inertia, conflict_response};
pub use inertia_injector::{FuncMap, TemplateError, TemplateFn};
pub use page::{Page, SsrResponse};
pub use props::{BoxFuture, Prop, PropFn, Props};
pub use request::InertiaRequest;
pub use ssr::{DEFAULT_SSR_URL, SsrClient};
pub use template::TemplateFs;

#[cfg(test)]
mod tests;
