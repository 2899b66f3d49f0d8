//! Error types for the SlicingDice SDK.
//!
//! Every failure surfaces as one [`Error`], categorized by [`ErrorKind`].
//! Errors raised by the service carry a [`ServiceErrorCode`] from a fixed
//! table, or the raw code when the table does not know it.
//!
//! ## Local vs. Remote
//!
//! Credential and payload checks run before any request is sent, so
//! [`ErrorKind::MissingCredential`], [`ErrorKind::InsufficientPrivilege`],
//! [`ErrorKind::InvalidPayload`] and [`ErrorKind::QuotaExceeded`] guarantee the
//! service was never contacted.
//!
//! ```rust,ignore
//! match client.count_entity(&query).await {
//!     Err(err) if err.kind().is_local() => eprintln!("rejected locally: {err}"),
//!     Err(err) => eprintln!("service failed: {err}"),
//!     Ok(body) => println!("{body}"),
//! }
//! ```

mod core;
mod kind;
mod service;

pub use self::core::Error;
pub use kind::ErrorKind;
pub use service::{ServiceErrorCategory, ServiceErrorCode};

/// A specialized `Result` type for SlicingDice operations.
pub type Result<T> = std::result::Result<T, Error>;
