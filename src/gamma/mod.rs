//! Polymarket Gamma API operations and types.
//!
//! The Gamma API serves market and event metadata, comments and unified
//! search. Every operation here is a method on [`Client`](crate::Client) and
//! is sent to its `host`.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/markets` | List markets (also backs lookup by slug and markets of an event) |
//! | `/markets/{id}` | Get market by ID |
//! | `/events` | List events (also backs lookup by slug) |
//! | `/events/{id}` | Get event by ID |
//! | `/comments` | List comments, optionally scoped to a market, event or series |
//! | `/public-search` | Search events, tags and profiles |
//!
//! # Example
//!
//! ```no_run
//! use polymarket_gamma_client::Client;
//! use polymarket_gamma_client::gamma::types::request::EventsRequest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let request = EventsRequest::builder()
//!     .active(true)
//!     .limit(10)
//!     .build();
//!
//! for event in client.events(&request)? {
//!     println!("{}: {:?}", event.id, event.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is `https://gamma-api.polymarket.com`.

pub mod client;
pub mod types;
