//! Testing utilities for code built on the SlicingDice SDK.
//!
//! - [`MockTransport`]: records requests and replays queued responses, so a
//!   real [`Client`](crate::Client) can run without a network
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use slicingdice::testing::MockTransport;
//! use slicingdice::transport::HttpResponse;
//!
//! let transport = Arc::new(MockTransport::new());
//! transport.push_response(HttpResponse::new(200, r#"{"status": "success"}"#));
//!
//! let client = Client::builder()
//!     .credentials(Credentials::new().with_master_key("test"))
//!     .build_with_transport(transport.clone())?;
//! ```

mod mock_transport;

pub use mock_transport::MockTransport;
