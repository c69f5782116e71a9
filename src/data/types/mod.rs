//! Types for the Polymarket Data API live volume endpoint.

pub mod request;
pub mod response;
