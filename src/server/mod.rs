//! HTTP surface of the update-check service
//!
//! # Modules
//!
//! - [`handlers`]: request handlers for the check, badge, and health endpoints
//! - [`pages`]: HTML assembly for the check-update page
//! - [`badge`]: JPEG badge rendering with a built-in bitmap font
//! - [`routes`]: router assembly and server lifecycle

pub mod badge;
pub mod handlers;
pub mod pages;
pub mod routes;
