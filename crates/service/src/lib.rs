//! Service layer providing business-oriented CRUD operations over the
//! in-memory entity store.
//! - Separates request handling from record bookkeeping.
//! - Reuses record and input definitions from the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod blogs;
pub mod errors;
pub mod proposals;
pub mod seed;
pub mod store;
