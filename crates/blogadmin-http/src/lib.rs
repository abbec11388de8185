//! blogadmin-http - HTTP implementation of the auth API.

mod api;
mod client;
mod endpoints;

pub use api::HttpAuthApi;
pub use endpoints::{LOGIN, ME};
