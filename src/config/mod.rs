//! Configuration types for the SlicingDice SDK.
//!
//! - [`EndpointConfig`]: base URL, test endpoint toggle, request timeout

mod endpoint;

pub use endpoint::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, EndpointConfig};
