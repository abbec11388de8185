//! blogadmin-file - filesystem-backed durable storage.

mod store;

pub use store::FileStorage;
