//! Callback-based request issuing
//!
//! [`TransportClient::fetch`] and [`TransportClient::submit`] return
//! immediately; the outcome is delivered from a spawned task through exactly
//! one of the two continuations of a [`Completion`]. Only an HTTP 200 counts
//! as success; any other status and any transport-level failure take the
//! failure path, with no retry and no status distinction.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::error::TransportError;
use crate::client::params::percent_encode;
use crate::client::transport::{Transport, TransportFactory, default_chain, resolve_transport};

/// Exactly-once continuation pair for one request.
///
/// Both closures are `FnOnce` and the pair is consumed on delivery, so the
/// single-outcome contract is enforced by ownership.
pub struct Completion<T> {
    on_success: Box<dyn FnOnce(T) + Send + 'static>,
    on_failure: Box<dyn FnOnce() + Send + 'static>,
}

impl<T> Completion<T> {
    pub fn new(
        on_success: impl FnOnce(T) + Send + 'static,
        on_failure: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            on_success: Box::new(on_success),
            on_failure: Box::new(on_failure),
        }
    }

    fn succeed(self, value: T) {
        (self.on_success)(value)
    }

    fn fail(self) {
        (self.on_failure)()
    }
}

/// Handle to an issued request, exclusively owned by the issuing call site.
///
/// There is no cancellation: dropping the handle detaches the request, which
/// runs to its single outcome regardless.
pub struct PendingRequest {
    _task: JoinHandle<()>,
}

/// Client for gate-style endpoints
pub struct TransportClient {
    transport: Arc<dyn Transport>,
}

impl TransportClient {
    /// Build a client from the default fallback chain.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_chain(&default_chain())
    }

    /// Build a client from a caller-supplied fallback chain.
    pub fn with_chain(chain: &[Box<dyn TransportFactory>]) -> Result<Self, TransportError> {
        Ok(Self {
            transport: resolve_transport(chain)?,
        })
    }

    /// Build a client around an already-constructed transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Issue a GET to `url`. On HTTP 200 the success continuation receives
    /// the response body; anything else takes the failure path.
    pub fn fetch(&self, url: &str, completion: Completion<String>) -> PendingRequest {
        let transport = Arc::clone(&self.transport);
        let url = url.to_string();
        let task = tokio::spawn(async move {
            match transport.get(&url).await {
                Ok(response) if response.status == 200 => completion.succeed(response.body),
                Ok(response) => {
                    debug!(status = response.status, url = %url, "fetch rejected");
                    completion.fail();
                }
                Err(e) => {
                    warn!(url = %url, "fetch transport failure: {e}");
                    completion.fail();
                }
            }
        });
        PendingRequest { _task: task }
    }

    /// Issue a form-encoded POST to `url` with the body
    /// `page=<page_id>&data=<percent-encoded data>`.
    ///
    /// `page_id` goes into the body unescaped; callers must keep it free of
    /// characters that need form encoding. The success continuation carries
    /// no payload: the endpoint acknowledges, it does not return data.
    pub fn submit(
        &self,
        url: &str,
        page_id: &str,
        data: &str,
        completion: Completion<()>,
    ) -> PendingRequest {
        let transport = Arc::clone(&self.transport);
        let url = url.to_string();
        let body = encode_submit_body(page_id, data);
        let task = tokio::spawn(async move {
            match transport.post_form(&url, body).await {
                Ok(response) if response.status == 200 => completion.succeed(()),
                Ok(response) => {
                    debug!(status = response.status, url = %url, "submit rejected");
                    completion.fail();
                }
                Err(e) => {
                    warn!(url = %url, "submit transport failure: {e}");
                    completion.fail();
                }
            }
        });
        PendingRequest { _task: task }
    }
}

/// Body shape the save endpoint expects. Only the `data` field is encoded.
pub fn encode_submit_body(page_id: &str, data: &str) -> String {
    format!("page={}&data={}", page_id, percent_encode(data))
}
