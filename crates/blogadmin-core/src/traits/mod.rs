//! Seams to the outside world: durable storage, the REST API and the router.

mod auth_api;
mod router;
mod storage;

pub use auth_api::AuthApi;
pub use router::Router;
pub use storage::Storage;
