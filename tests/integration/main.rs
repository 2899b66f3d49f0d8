//! Integration tests for the SlicingDice Rust SDK.
//!
//! Each test starts a local `wiremock` server standing in for the service and
//! drives a real [`Client`](slicingdice::Client) with the reqwest transport
//! against it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With SDK logs
//! RUST_LOG=slicingdice=debug cargo test --test integration -- --nocapture
//! ```

mod common;
mod endpoint_tests;
mod error_tests;
mod operation_tests;
