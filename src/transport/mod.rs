//! Transport layer for SlicingDice communication.
//!
//! The dispatcher hands every prepared [`HttpRequest`] to an
//! [`HttpTransport`] and decodes the [`HttpResponse`] it gets back.
//!
//! - [`RestTransport`] (feature `rest`, default): reqwest
//! - [`MockTransport`](crate::testing::MockTransport): records requests and
//!   replays queued responses, for tests
//!
//! Retries, pooling and TLS settings belong to the transport; the SDK core
//! never retries.

mod traits;

#[cfg(feature = "rest")]
mod rest;

pub use traits::{HttpRequest, HttpResponse, HttpTransport, Method, TransportFuture};

#[cfg(feature = "rest")]
pub use rest::RestTransport;
