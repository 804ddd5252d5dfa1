/* src/server/core/rust/src/headers.rs */

use axum::http::HeaderName;

/// Marks a protocol (SPA navigation) request or response.
pub const INERTIA: HeaderName = HeaderName::from_static("x-inertia");
/// Client's known asset version.
pub const VERSION: HeaderName = HeaderName::from_static("x-inertia-version");
/// Full-page redirect target.
pub const LOCATION: HeaderName = HeaderName::from_static("x-inertia-location");
/// Component name a partial reload targets.
pub const PARTIAL_COMPONENT: HeaderName = HeaderName::from_static("x-inertia-partial-component");
/// Comma-separated prop keys a partial reload asks for.
pub const PARTIAL_DATA: HeaderName = HeaderName::from_static("x-inertia-partial-data");
/// Reserved; not consumed by this crate.
pub const PARTIAL_EXCEPT: HeaderName = HeaderName::from_static("x-inertia-partial-except");
/// Reserved; not consumed by this crate.
pub const ERROR_BAG: HeaderName = HeaderName::from_static("x-inertia-error-bag");
