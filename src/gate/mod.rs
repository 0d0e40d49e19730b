//! Version gate: is a client-reported version current or stale?
//!
//! # Modules
//!
//! - [`tuple`]: version string sanitization and the 4-component tuple
//! - [`compare`]: the staleness decision between two tuples
//! - [`store`]: read-only access to the stored "latest version" value
//! - [`error`]: error types for store access

pub mod compare;
pub mod error;
pub mod store;
pub mod tuple;
