use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::types::Decimal;

/// Trading volume for a specific market.
///
/// Used within [`LiveVolume`] to show per-market volume breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct MarketVolume {
    /// The market identifier or address.
    pub market: String,
    /// Trading volume in USDC.
    pub value: Decimal,
}

/// Live trading volume for an event.
///
/// Returned by the `/live-volume` endpoint. Includes total volume
/// and per-market breakdown.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct LiveVolume {
    /// Total trading volume across all markets in the event.
    pub total: Decimal,
    /// Per-market volume breakdown.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub markets: Vec<MarketVolume>,
}
