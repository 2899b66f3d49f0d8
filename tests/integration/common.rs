//! Common test harness for SlicingDice integration tests.

use std::sync::Once;

use anyhow::Result;
use slicingdice::{Client, Credentials};
use wiremock::MockServer;

static TRACING: Once = Once::new();

/// Installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A mock service plus a client pointed at it.
pub struct TestService {
    pub server: MockServer,
    pub client: Client,
}

impl TestService {
    /// Starts a mock service and builds a client with `credentials`.
    pub async fn start(credentials: Credentials) -> Result<Self> {
        init_tracing();
        let server = MockServer::start().await;
        let client = Client::builder()
            .credentials(credentials)
            .base_url(format!("{}/v1", server.uri()))
            .build()?;
        Ok(Self { server, client })
    }

    /// Starts a mock service with a master key.
    pub async fn with_master_key() -> Result<Self> {
        Self::start(Credentials::new().with_master_key("test-master-key")).await
    }

    /// Number of requests the mock service has received.
    pub async fn received(&self) -> usize {
        self.server.received_requests().await.map_or(0, |requests| requests.len())
    }
}
