//! Count query demo.
//!
//! Inserts two entities into the test endpoint and counts them back.
//!
//! # Running
//!
//! ```bash
//! export SD_MASTER_KEY="your-master-key"
//! # Optional: point at another deployment
//! export SD_API_ADDRESS="https://api.slicingdice.com/v1"
//!
//! RUST_LOG=slicingdice=debug cargo run -p slicingdice-demos --bin count_query
//! ```

use std::env;

use serde_json::json;
use slicingdice::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let master_key = env::var("SD_MASTER_KEY")?;

    // Everything below goes to <base>/test/...
    let client = Client::builder()
        .credentials(Credentials::new().with_master_key(master_key))
        .use_test_endpoint(true)
        .build()?;

    tracing::info!(base_url = client.base_url(), "inserting demo entities");
    let inserted = client
        .insert(&json!({
            "user1@slicingdice.com": {"state": "NY", "age": 22},
            "user2@slicingdice.com": {"state": "CA", "age": 31},
            "auto-create": ["dimension", "column"]
        }))
        .await?;
    println!("insert: {inserted}");

    let counts = client
        .count_entity(&json!({
            "users-from-ny": {"query": [{"state": {"equals": "NY"}}]},
            "adults": {"query": [{"age": {"gte": 18}}]},
            "bypass-cache": true
        }))
        .await?;
    println!("count: {counts}");

    // Rejected locally: eleven queries in one request.
    let too_many: serde_json::Map<String, serde_json::Value> = (0..11)
        .map(|i| (format!("q{i}"), json!({"query": [{"age": {"gte": i}}]})))
        .collect();
    match client.count_entity(&serde_json::Value::Object(too_many)).await {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) if err.kind() == ErrorKind::QuotaExceeded => {
            tracing::warn!(error = %err, "count request rejected locally");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
