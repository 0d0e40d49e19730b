//! Update-check facility for a desktop application's companion website.
//!
//! Three layers:
//!
//! - [`gate`]: decides whether a client-reported version is current or stale
//!   against a stored reference version
//! - [`client`]: generic asynchronous request/response primitives (GET fetch,
//!   form-encoded POST, query-string parameter codec) for talking to such
//!   endpoints
//! - [`server`]: the HTTP surface (check page, version badge, health probe)

pub mod client;
pub mod config;
pub mod gate;
pub mod server;
