//! Transport abstraction and fallback-chain construction
//!
//! The concrete transport is picked through an ordered chain of constructor
//! attempts: the first factory that builds successfully wins, and the chain
//! being exhausted is a fatal error surfaced before any request is sent.

#[cfg(test)]
use mockall::automock;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::error::TransportError;
use crate::config::{FETCH_TIMEOUT, USER_AGENT};

/// Terminal state of one HTTP exchange
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// One HTTP mechanism. Implementations report transport-level failures as
/// errors and deliver every received response, whatever its status; the
/// success/failure decision belongs to the caller.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;

    async fn post_form(
        &self,
        url: &str,
        body: String,
    ) -> Result<TransportResponse, TransportError>;
}

/// One constructor attempt in the fallback chain
pub trait TransportFactory: Send + Sync {
    fn name(&self) -> &'static str;

    fn build(&self) -> Result<Arc<dyn Transport>, TransportError>;
}

/// Try each factory in order; the first that constructs wins.
pub fn resolve_transport(
    chain: &[Box<dyn TransportFactory>],
) -> Result<Arc<dyn Transport>, TransportError> {
    for factory in chain {
        match factory.build() {
            Ok(transport) => {
                debug!("using transport mechanism: {}", factory.name());
                return Ok(transport);
            }
            Err(e) => warn!("transport mechanism {} unavailable: {}", factory.name(), e),
        }
    }
    Err(TransportError::NoTransport)
}

/// The production chain: fully-configured client first, minimal client as the
/// last resort. Both attach the cookie jar; requests always carry credentials.
pub fn default_chain() -> Vec<Box<dyn TransportFactory>> {
    vec![
        Box::new(PrimaryTransportFactory),
        Box::new(FallbackTransportFactory),
    ]
}

/// Transport backed by a [`reqwest::Client`]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }

    async fn post_form(
        &self,
        url: &str,
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

/// Preferred mechanism: cookie jar plus a request timeout
pub struct PrimaryTransportFactory;

impl TransportFactory for PrimaryTransportFactory {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    fn build(&self) -> Result<Arc<dyn Transport>, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Construction(e.to_string()))?;
        Ok(Arc::new(ReqwestTransport::new(client)))
    }
}

/// Last resort: minimally-configured client, cookie jar still attached
pub struct FallbackTransportFactory;

impl TransportFactory for FallbackTransportFactory {
    fn name(&self) -> &'static str {
        "reqwest-minimal"
    }

    fn build(&self) -> Result<Arc<dyn Transport>, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::Construction(e.to_string()))?;
        Ok(Arc::new(ReqwestTransport::new(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingFactory;

    impl TransportFactory for FailingFactory {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn build(&self) -> Result<Arc<dyn Transport>, TransportError> {
            Err(TransportError::Construction("not available here".into()))
        }
    }

    struct WorkingFactory;

    impl TransportFactory for WorkingFactory {
        fn name(&self) -> &'static str {
            "working"
        }

        fn build(&self) -> Result<Arc<dyn Transport>, TransportError> {
            FallbackTransportFactory.build()
        }
    }

    #[test]
    fn resolve_transport_falls_through_to_first_working_factory() {
        let chain: Vec<Box<dyn TransportFactory>> =
            vec![Box::new(FailingFactory), Box::new(WorkingFactory)];

        assert!(resolve_transport(&chain).is_ok());
    }

    #[test]
    fn resolve_transport_reports_exhausted_chain() {
        let chain: Vec<Box<dyn TransportFactory>> =
            vec![Box::new(FailingFactory), Box::new(FailingFactory)];

        assert!(matches!(
            resolve_transport(&chain),
            Err(TransportError::NoTransport)
        ));
    }

    #[test]
    fn resolve_transport_rejects_empty_chain() {
        assert!(matches!(
            resolve_transport(&[]),
            Err(TransportError::NoTransport)
        ));
    }

    #[test]
    fn default_chain_constructs_a_transport() {
        assert!(resolve_transport(&default_chain()).is_ok());
    }
}
