//! Polymarket Data API live volume operations and types.
//!
//! The statistics service is a separate host from the Gamma metadata service.
//! [`Client`](crate::Client) sends these requests to its `data_host`.
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/live-volume` | Live volume for one or more events |
//!
//! # Example
//!
//! ```no_run
//! use polymarket_gamma_client::Client;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let volume = client.live_volume(123)?;
//! println!("total: {}", volume.total);
//!
//! for market in client.event_market_volumes(123)? {
//!     println!("{}: {}", market.market, market.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is `https://data-api.polymarket.com`.

pub mod client;
pub mod types;
