//! End-to-end request shape for each operation.

use anyhow::Result;
use serde_json::json;
use slicingdice::Credentials;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestService;

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

#[tokio::test]
async fn test_create_column_array() -> Result<()> {
    let service = TestService::with_master_key().await?;
    let columns = json!([
        {"name": "State", "api-name": "state", "type": "string", "cardinality": "high"},
        {"name": "Age", "api-name": "age", "type": "integer"},
    ]);

    Mock::given(method("POST"))
        .and(path("/v1/column/"))
        .and(header("authorization", "test-master-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(&columns))
        .respond_with(ok(json!({"status": "success", "api-name": ["state", "age"]})))
        .expect(1)
        .mount(&service.server)
        .await;

    let body = service.client.create_column(&columns).await?;
    assert_eq!(body["status"], "success");
    Ok(())
}

#[tokio::test]
async fn test_listing_operations_use_get() -> Result<()> {
    let service = TestService::with_master_key().await?;

    Mock::given(method("GET"))
        .and(path("/v1/column/"))
        .and(header("content-type", "application/json"))
        .respond_with(ok(json!({"active": [], "inactive": []})))
        .expect(1)
        .mount(&service.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/project/"))
        .respond_with(ok(json!({"name": "demo"})))
        .expect(1)
        .mount(&service.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/query/saved/"))
        .respond_with(ok(json!({"saved_queries": []})))
        .expect(1)
        .mount(&service.server)
        .await;

    assert!(service.client.columns().await?["active"].is_array());
    assert_eq!(service.client.database().await?["name"], "demo");
    assert!(service.client.saved_queries().await?["saved_queries"].is_array());
    Ok(())
}

#[tokio::test]
async fn test_insert_with_write_key() -> Result<()> {
    let service = TestService::start(Credentials::new().with_write_key("write-key")).await?;
    let data = json!({"user1@slicingdice.com": {"age": 22}, "auto-create": ["dimension", "column"]});

    Mock::given(method("POST"))
        .and(path("/v1/insert/"))
        .and(header("authorization", "write-key"))
        .and(body_json(&data))
        .respond_with(ok(json!({"status": "success", "inserted-entities": 1})))
        .expect(1)
        .mount(&service.server)
        .await;

    let body = service.client.insert(&data).await?;
    assert_eq!(body["inserted-entities"], 1);
    Ok(())
}

#[tokio::test]
async fn test_queries_with_read_key() -> Result<()> {
    let service = TestService::start(Credentials::new().with_read_key("read-key")).await?;

    let count = json!({"ny": {"query": [{"state": {"equals": "NY"}}]}, "bypass-cache": true});
    let aggregation = json!({"query": [{"state": 3}]});
    let top = json!({"states": {"column": "state", "limit": 3}});

    for (route, expected) in [
        ("/v1/query/count/entity/", &count),
        ("/v1/query/count/event/", &count),
        ("/v1/query/aggregation/", &aggregation),
        ("/v1/query/top_values/", &top),
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .and(header("authorization", "read-key"))
            .and(body_json(expected))
            .respond_with(ok(json!({"status": "success", "route": route})))
            .expect(1)
            .mount(&service.server)
            .await;
    }

    assert_eq!(service.client.count_entity(&count).await?["route"], "/v1/query/count/entity/");
    assert_eq!(service.client.count_event(&count).await?["route"], "/v1/query/count/event/");
    assert_eq!(service.client.aggregation(&aggregation).await?["route"], "/v1/query/aggregation/");
    assert_eq!(service.client.top_values(&top).await?["route"], "/v1/query/top_values/");
    Ok(())
}

#[tokio::test]
async fn test_count_entity_total_variants() -> Result<()> {
    let service = TestService::start(Credentials::new().with_custom_key("custom-key")).await?;

    Mock::given(method("POST"))
        .and(path("/v1/query/count/entity/total/"))
        .and(body_json(json!({})))
        .respond_with(ok(json!({"result": {"total": 42}})))
        .expect(1)
        .mount(&service.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/query/count/entity/total/"))
        .and(body_json(json!({"tables": ["users"]})))
        .respond_with(ok(json!({"result": {"total": 7}})))
        .expect(1)
        .mount(&service.server)
        .await;

    assert_eq!(service.client.count_entity_total().await?["result"]["total"], 42);
    assert_eq!(service.client.count_entity_total_for(["users"]).await?["result"]["total"], 7);
    Ok(())
}

#[tokio::test]
async fn test_exists_entity() -> Result<()> {
    let service = TestService::with_master_key().await?;

    Mock::given(method("POST"))
        .and(path("/v1/query/exists/entity/"))
        .and(body_json(json!({"ids": ["u1", "u2"]})))
        .respond_with(ok(json!({"exists": ["u1"], "not-exists": ["u2"]})))
        .expect(1)
        .mount(&service.server)
        .await;

    let body = service.client.exists_entity(["u1", "u2"], None).await?;
    assert_eq!(body["exists"], json!(["u1"]));
    Ok(())
}

#[tokio::test]
async fn test_saved_query_lifecycle() -> Result<()> {
    let service = TestService::with_master_key().await?;
    let saved = json!({"name": "ny-users", "type": "count/entity", "query": [{"state": {"equals": "NY"}}]});
    let update = json!({"type": "count/entity", "query": [{"state": {"equals": "CA"}}]});

    Mock::given(method("POST"))
        .and(path("/v1/query/saved/"))
        .and(body_json(&saved))
        .respond_with(ok(json!({"status": "success", "name": "ny-users"})))
        .expect(1)
        .mount(&service.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/query/saved/ny-users"))
        .respond_with(ok(json!({"result": {"ny-users": 3}})))
        .expect(1)
        .mount(&service.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/query/saved/ny-users"))
        .and(body_json(&update))
        .respond_with(ok(json!({"status": "success"})))
        .expect(1)
        .mount(&service.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/query/saved/ny-users"))
        .and(header("content-type", "application/json"))
        .respond_with(ok(json!({"status": "success", "deleted-query": "ny-users"})))
        .expect(1)
        .mount(&service.server)
        .await;

    service.client.create_saved_query(&saved).await?;
    assert_eq!(service.client.saved_query("ny-users").await?["result"]["ny-users"], 3);
    service.client.update_saved_query("ny-users", &update).await?;
    let deleted = service.client.delete_saved_query("ny-users").await?;
    assert_eq!(deleted["deleted-query"], "ny-users");
    Ok(())
}

#[tokio::test]
async fn test_data_extraction() -> Result<()> {
    let service = TestService::start(Credentials::new().with_read_key("read-key")).await?;
    let query = json!({"query": [{"age": {"gte": 18}}], "columns": ["age"], "limit": 100});

    for route in ["/v1/data_extraction/score/", "/v1/data_extraction/result/"] {
        Mock::given(method("POST"))
            .and(path(route))
            .and(body_json(&query))
            .respond_with(ok(json!({"data": {}, "page": 1})))
            .expect(1)
            .mount(&service.server)
            .await;
    }

    service.client.score(&query).await?;
    service.client.result(&query).await?;
    Ok(())
}

#[tokio::test]
async fn test_sql_pass_through() -> Result<()> {
    let service = TestService::start(Credentials::new().with_read_key("read-key")).await?;
    let statement = "SELECT COUNT(*) FROM default WHERE state = 'NY'";

    Mock::given(method("POST"))
        .and(path("/v1/query/sql/"))
        .and(header("content-type", "application/sql"))
        .and(body_string(statement))
        .respond_with(ok(json!({"result": [{"COUNT": 3}]})))
        .expect(1)
        .mount(&service.server)
        .await;

    let body = service.client.sql(statement).await?;
    assert_eq!(body["result"][0]["COUNT"], 3);
    Ok(())
}
