//! Test endpoint routing and transport failures.

use std::time::Duration;

use anyhow::{Result, bail};
use serde_json::json;
use slicingdice::{Client, Credentials, ErrorKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{TestService, init_tracing};

#[tokio::test]
async fn test_endpoint_view_routes_to_test_prefix() -> Result<()> {
    let service = TestService::with_master_key().await?;

    Mock::given(method("POST"))
        .and(path("/v1/test/insert/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success", "test": true})))
        .expect(1)
        .mount(&service.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/insert/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success", "test": false})))
        .expect(1)
        .mount(&service.server)
        .await;

    let data = json!({"u1": {"age": 1}});
    assert_eq!(service.client.test_endpoint().insert(&data).await?["test"], true);
    assert_eq!(service.client.insert(&data).await?["test"], false);
    Ok(())
}

#[tokio::test]
async fn test_builder_default_test_endpoint() -> Result<()> {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/test/column/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .credentials(Credentials::new().with_master_key("k"))
        .base_url(format!("{}/v1", server.uri()))
        .use_test_endpoint(true)
        .build()?;

    client.columns().await?;
    Ok(())
}

#[tokio::test]
async fn test_client_timeout() -> Result<()> {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = Client::builder()
        .credentials(Credentials::new().with_master_key("k"))
        .base_url(format!("{}/v1", server.uri()))
        .timeout(Duration::from_millis(100))
        .build()?;

    match client.columns().await {
        Ok(body) => bail!("expected a timeout, got {}", body),
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::Timeout);
            assert!(err.is_retriable());
        }
    }
    Ok(())
}
