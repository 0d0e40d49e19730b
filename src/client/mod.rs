//! Asynchronous request/response primitives for talking to gate-style
//! endpoints.
//!
//! Every issued operation resolves through exactly one of a pair of
//! continuation callbacks; there is no retry, no cancellation, and no shared
//! state between requests.
//!
//! # Modules
//!
//! - [`params`]: query-string / form-body parameter codec
//! - [`transport`]: transport abstraction and fallback-chain construction
//! - [`request`]: callback-based request issuing ([`request::TransportClient`])
//! - [`error`]: transport error types

pub mod error;
pub mod params;
pub mod request;
pub mod transport;
