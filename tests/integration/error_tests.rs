//! Local rejections and decoded service failures.

use anyhow::{Result, bail};
use serde_json::{Map, Value, json};
use slicingdice::{Credentials, Error, ErrorKind, ServiceErrorCode};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestService;

fn expect_err(result: slicingdice::Result<Value>) -> Result<Error> {
    match result {
        Ok(body) => bail!("expected an error, got {}", body),
        Err(err) => Ok(err),
    }
}

#[tokio::test]
async fn test_local_rejections_never_reach_the_service() -> Result<()> {
    let service = TestService::start(Credentials::new().with_read_key("read-key")).await?;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(0)
        .mount(&service.server)
        .await;

    let err = expect_err(service.client.insert(&json!({"u": {"age": 1}})).await)?;
    assert_eq!(err.kind(), ErrorKind::InsufficientPrivilege);

    let eleven: Map<String, Value> = (0..11).map(|i| (format!("q{}", i), json!({}))).collect();
    let err = expect_err(service.client.count_entity(&Value::Object(eleven)).await)?;
    assert_eq!(err.kind(), ErrorKind::QuotaExceeded);

    let err = expect_err(service.client.result(&json!({"limit": 101})).await)?;
    assert_eq!(err.kind(), ErrorKind::QuotaExceeded);

    let ids: Vec<String> = (0..101).map(|i| i.to_string()).collect();
    let err = expect_err(service.client.exists_entity(ids, None).await)?;
    assert_eq!(err.kind(), ErrorKind::QuotaExceeded);

    assert_eq!(service.received().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_missing_credentials() -> Result<()> {
    let service = TestService::start(Credentials::new().with_master_key("")).await?;
    let err = expect_err(service.client.columns().await)?;
    assert_eq!(err.kind(), ErrorKind::MissingCredential);
    assert!(err.kind().is_local());
    assert_eq!(service.received().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_known_service_error() -> Result<()> {
    let service = TestService::with_master_key().await?;
    Mock::given(method("POST"))
        .and(path("/v1/column/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{
                "code": 43,
                "message": "Column already exists.",
                "more-info": "https://docs.slicingdice.com/docs/api-errors"
            }]
        })))
        .mount(&service.server)
        .await;

    let err = expect_err(
        service
            .client
            .create_column(&json!({"name": "age", "type": "integer"}))
            .await,
    )?;
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.service_error(), Some(ServiceErrorCode::ColumnAlreadyExists));
    assert_eq!(err.code(), Some(43));
    assert_eq!(err.message(), "Column already exists.");
    assert_eq!(err.more_info(), Some("https://docs.slicingdice.com/docs/api-errors"));
    assert_eq!(err.status(), Some(400));
    Ok(())
}

#[tokio::test]
async fn test_unknown_service_error() -> Result<()> {
    let service = TestService::with_master_key().await?;
    Mock::given(method("GET"))
        .and(path("/v1/project/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"code": 9999, "message": "new failure"}]
        })))
        .mount(&service.server)
        .await;

    let err = expect_err(service.client.database().await)?;
    assert_eq!(err.kind(), ErrorKind::UnknownService);
    assert_eq!(err.code(), Some(9999));
    assert!(err.service_error().is_none());
    Ok(())
}

#[tokio::test]
async fn test_non_json_body() -> Result<()> {
    let service = TestService::with_master_key().await?;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&service.server)
        .await;

    let err = expect_err(service.client.columns().await)?;
    assert_eq!(err.kind(), ErrorKind::InternalDecode);
    assert_eq!(err.status(), Some(502));
    Ok(())
}

#[tokio::test]
async fn test_error_status_without_envelope() -> Result<()> {
    let service = TestService::with_master_key().await?;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "missing"})))
        .mount(&service.server)
        .await;

    let err = expect_err(service.client.saved_query("nope").await)?;
    assert_eq!(err.kind(), ErrorKind::Http);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Not Found");
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_is_retriable() -> Result<()> {
    let service = TestService::with_master_key().await?;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "errors": [{"code": 1502, "message": "Too many requests"}]
        })))
        .mount(&service.server)
        .await;

    let err = expect_err(service.client.count_entity(&json!({"q": {"query": []}})).await)?;
    assert_eq!(err.service_error(), Some(ServiceErrorCode::RequestRateLimited));
    assert!(err.is_retriable());
    Ok(())
}
