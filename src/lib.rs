//! # SlicingDice Rust SDK
//!
//! Rust client for the SlicingDice count and aggregation API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use serde_json::json;
//! use slicingdice::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), slicingdice::Error> {
//!     let client = Client::builder()
//!         .credentials(Credentials::new().with_master_key("your-master-key"))
//!         .build()?;
//!
//!     let counts = client
//!         .count_entity(&json!({
//!             "users-from-ny": {"query": [{"state": {"equals": "NY"}}]}
//!         }))
//!         .await?;
//!     println!("{}", counts);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **One key per call**: the highest configured key wins (master, custom,
//!   write, read) and must match the operation's privilege level
//! - **Local checks first**: privilege and payload limits are checked before
//!   any request is sent
//! - **Typed service errors**: error envelopes become [`Error`] values tagged
//!   with a [`ServiceErrorCode`]
//! - **Test endpoint**: [`Client::test_endpoint()`] sends calls to
//!   `<base>/test/...`
//!
//! ## Features
//!
//! - `rest` (default): reqwest-based [`RestTransport`](transport::RestTransport)
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod operation;
pub mod response;
pub mod validate;

// Transport layer
pub mod transport;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, Result, ServiceErrorCategory, ServiceErrorCode};
pub use operation::{Operation, OperationDescriptor};
pub use response::CheckedResponse;

// Re-export auth types
pub use auth::{ApiKey, Credentials, KeySlot, PrivilegeLevel};

// Re-export config types
pub use config::EndpointConfig;
