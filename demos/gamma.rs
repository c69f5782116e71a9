//! Gamma and live volume endpoint explorer.
//!
//! Fetches lists first, then uses real ids and slugs from those responses for
//! the lookups that need them.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,rustls=off cargo run --example gamma --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=gamma.log RUST_LOG=info cargo run --example gamma --features tracing
//! ```

use std::fs::File;

use polymarket_gamma_client::Client;
use polymarket_gamma_client::gamma::types::request::{
    CommentsRequest, EventByIdRequest, EventsRequest, MarketByIdRequest, MarketsRequest,
    SearchRequest,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::default();

    let markets = client.markets(&MarketsRequest::builder().limit(5).active(true).build());
    match &markets {
        Ok(v) => info!(endpoint = "markets", count = v.len()),
        Err(e) => debug!(endpoint = "markets", error = %e),
    }

    if let Some(market) = markets.ok().and_then(|v| v.into_iter().next()) {
        let request = MarketByIdRequest::builder().id(&market.id).build();
        match client.market_by_id(&request) {
            Ok(m) => info!(endpoint = "market_by_id", id = %m.id, question = ?m.question),
            Err(e) => debug!(endpoint = "market_by_id", id = %market.id, error = %e),
        }

        if let Some(slug) = &market.slug {
            match client.market_by_slug(slug) {
                Ok(m) => info!(endpoint = "market_by_slug", slug = %slug, id = %m.id),
                Err(e) => debug!(endpoint = "market_by_slug", slug = %slug, error = %e),
            }
        }
    }

    let events = client.events(&EventsRequest::builder().limit(5).active(true).build());
    match &events {
        Ok(v) => info!(endpoint = "events", count = v.len()),
        Err(e) => debug!(endpoint = "events", error = %e),
    }

    if let Some(event) = events.ok().and_then(|v| v.into_iter().next()) {
        let request = EventByIdRequest::builder().id(&event.id).build();
        match client.event_by_id(&request) {
            Ok(e) => info!(endpoint = "event_by_id", id = %e.id, title = ?e.title),
            Err(e) => debug!(endpoint = "event_by_id", id = %event.id, error = %e),
        }

        if let Some(slug) = &event.slug {
            match client.event_by_slug(slug) {
                Ok(e) => info!(endpoint = "event_by_slug", slug = %slug, id = %e.id),
                Err(e) => debug!(endpoint = "event_by_slug", slug = %slug, error = %e),
            }
        }

        match client.event_markets(&event.id) {
            Ok(v) => info!(endpoint = "event_markets", id = %event.id, count = v.len()),
            Err(e) => debug!(endpoint = "event_markets", id = %event.id, error = %e),
        }

        if let Ok(id) = event.id.parse::<i64>() {
            let comments = CommentsRequest::builder().limit(5).build();
            match client.event_comments(id, &comments) {
                Ok(v) => info!(endpoint = "event_comments", id, count = v.len()),
                Err(e) => debug!(endpoint = "event_comments", id, error = %e),
            }

            match client.live_volume(id) {
                Ok(v) => info!(
                    endpoint = "live_volume",
                    id,
                    total = %v.total,
                    markets = v.markets.len()
                ),
                Err(e) => debug!(endpoint = "live_volume", id, error = %e),
            }
        }
    }

    let search = SearchRequest::builder().limit_per_type(3).build();
    match client.search_events("election", &search) {
        Ok(v) => info!(endpoint = "search_events", count = v.len()),
        Err(e) => debug!(endpoint = "search_events", error = %e),
    }
    match client.search_tags("crypto", &search) {
        Ok(v) => info!(endpoint = "search_tags", count = v.len()),
        Err(e) => debug!(endpoint = "search_tags", error = %e),
    }
    match client.search_profiles("whale", &search) {
        Ok(v) => info!(endpoint = "search_profiles", count = v.len()),
        Err(e) => debug!(endpoint = "search_profiles", error = %e),
    }

    Ok(())
}
