//! Request handlers for the check, badge, and health endpoints

use std::sync::Arc;

use axum::Json;
use axum::extract::{RawQuery, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Serialize;
use tracing::warn;

use crate::client::params;
use crate::gate::compare::evaluate;
use crate::gate::tuple::{ZERO_VERSION, normalize_client, sanitize_reference};
use crate::server::badge::{self, render_badge};
use crate::server::pages::render_check_page;
use crate::server::routes::AppState;

/// `GET /check-update?version=<M.m.p.b>`
///
/// Without a `version` parameter the visitor is redirected to the homepage
/// instead of being evaluated. A malformed version is never an error; it is
/// normalized to all-zero and compared like any other.
pub async fn check_update(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Response {
    let query_params = params::decode(query.as_deref().unwrap_or(""));
    let Some(version) = query_params.get("version") else {
        return Redirect::temporary(&state.config.redirect_url).into_response();
    };

    // A flag-valued parameter carries no version text; it normalizes to zero
    // like any other malformed input.
    let client_raw = version.as_text().unwrap_or("");
    let reference_raw = match state.store.read_latest() {
        Ok(line) => line,
        Err(e) => {
            warn!("version store read failed: {e}");
            ZERO_VERSION.to_string()
        }
    };

    let outcome = evaluate(client_raw, &reference_raw);

    // The page shows the same strings the comparison saw.
    let client_display = normalize_client(client_raw);
    let reference_display = sanitize_reference(&reference_raw);
    let page = render_check_page(
        outcome,
        client_display,
        &reference_display,
        &state.config.redirect_url,
    );

    Html(page).into_response()
}

/// `GET /version.jpg`
///
/// Always answers 200 with a valid JPEG; a store read failure is reported
/// in-band as `Version: error`.
pub async fn version_badge(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let text = match state.store.read_latest() {
        Ok(version) => version,
        Err(e) => {
            warn!("version store read failed: {e}");
            badge::ERROR_TEXT.to_string()
        }
    };

    let bytes = render_badge(&text);
    ([(header::CONTENT_TYPE, "image/jpeg")], bytes)
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
