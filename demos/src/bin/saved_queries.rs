//! Saved query demo.
//!
//! Creates, runs and deletes a saved query, showing how service errors are
//! inspected.
//!
//! # Running
//!
//! ```bash
//! export SD_MASTER_KEY="your-master-key"
//! cargo run -p slicingdice-demos --bin saved_queries
//! ```

use std::env;

use serde_json::json;
use slicingdice::prelude::*;
use tracing_subscriber::EnvFilter;

const NAME: &str = "demo-users-from-ny";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = Client::builder()
        .credentials(Credentials::new().with_master_key(env::var("SD_MASTER_KEY")?))
        .build()?
        .test_endpoint();

    let created = client
        .create_saved_query(&json!({
            "name": NAME,
            "type": "count/entity",
            "query": [{"state": {"equals": "NY"}}],
            "cache-period": 100
        }))
        .await;

    match created {
        Ok(body) => println!("created: {body}"),
        Err(err) if err.service_error() == Some(ServiceErrorCode::QuerySavedAlreadyExists) => {
            tracing::info!(name = NAME, "saved query already exists, reusing it");
        }
        Err(err) => return Err(err.into()),
    }

    println!("run: {}", client.saved_query(NAME).await?);
    println!("all: {}", client.saved_queries().await?);
    println!("delete: {}", client.delete_saved_query(NAME).await?);

    Ok(())
}
