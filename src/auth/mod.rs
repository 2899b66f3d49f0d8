//! API keys and the privilege rule for the SlicingDice SDK.
//!
//! The service issues four kinds of key:
//!
//! - **master** and **custom** keys may do anything
//! - **write** keys may only insert data and create saved queries
//! - **read** keys may only query
//!
//! A client holds a [`Credentials`] set. Every call uses the single highest
//! priority key (master, then custom, then write, then read) and checks it
//! against the operation's [`PrivilegeLevel`] before any request is sent.
//!
//! ```rust,ignore
//! use slicingdice::{Client, Credentials};
//!
//! let client = Client::builder()
//!     .credentials(Credentials::new().with_read_key("your-read-key"))
//!     .build()?;
//!
//! // Rejected locally: a read key cannot insert.
//! let err = client.insert(&data).await.unwrap_err();
//! ```

mod credentials;
mod key;

pub use credentials::{Credentials, ResolvedKey};
pub use key::{ApiKey, KeySlot, PrivilegeLevel};
