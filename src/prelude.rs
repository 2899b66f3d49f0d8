//! Convenient imports for common SlicingDice SDK usage.
//!
//! ```rust
//! use slicingdice::prelude::*;
//! ```

pub use crate::{
    auth::{ApiKey, Credentials, KeySlot, PrivilegeLevel},
    client::{Client, ClientBuilder},
    config::EndpointConfig,
    error::{Error, ErrorKind, Result, ServiceErrorCode},
    operation::Operation,
};
