//! Types for the Polymarket Gamma API.
//!
//! - **Request types**: Builder-pattern options structs for each endpoint
//!   (e.g., [`request::EventsRequest`], [`request::MarketsRequest`]).
//!
//! - **Response types**: Entities decoded from API responses
//!   (e.g., [`response::Event`], [`response::Market`], [`response::Comment`]).
//!
//! # Request Building
//!
//! All request types use the builder pattern via the [`bon`](https://docs.rs/bon) crate:
//!
//! ```
//! use polymarket_gamma_client::gamma::types::request::{EventsRequest, MarketsRequest};
//!
//! // Simple request with defaults
//! let events = EventsRequest::builder().build();
//!
//! // Request with filters
//! let markets = MarketsRequest::builder()
//!     .limit(10)
//!     .closed(false)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// The kind of entity a comment is attached to.
///
/// The wire tokens are `market`, `Event` and `Series`, with that exact casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[non_exhaustive]
pub enum ParentEntityType {
    Event,
    Series,
    #[serde(rename = "market")]
    #[strum(serialize = "market")]
    Market,
    /// Unknown entity type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}
