//! Live volume operations on [`Client`], served by the statistics host.

use super::types::request::LiveVolumeRequest;
use super::types::response::{LiveVolume, MarketVolume};
use crate::query::Query;
use crate::types::Decimal;
use crate::{Client, Result, first_or_not_found};

impl Client {
    /// Retrieves live volume for one or more events.
    ///
    /// The response holds at most one entry per requested id. An empty list
    /// means the service has no data for any of them and is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Validation`](crate::error::Kind::Validation) error without
    /// sending anything if `request.id` is empty or holds an id below 1, or an
    /// error if the request fails.
    pub fn live_volumes(&self, request: &LiveVolumeRequest) -> Result<Vec<LiveVolume>> {
        request.validate()?;

        self.get(self.data_host(), "live-volume", Query::LiveVolume(request))
    }

    /// Retrieves live volume for a single event.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::NotFound`](crate::error::Kind::NotFound) error naming the
    /// event id if the service returns no entry, or any error from
    /// [`Self::live_volumes`].
    pub fn live_volume(&self, event_id: i64) -> Result<LiveVolume> {
        let request = LiveVolumeRequest::builder().id(vec![event_id]).build();

        first_or_not_found(
            self.live_volumes(&request)?,
            "live volume",
            &event_id.to_string(),
        )
    }

    /// Retrieves the total live volume of an event.
    ///
    /// # Errors
    ///
    /// See [`Self::live_volume`].
    pub fn event_total_volume(&self, event_id: i64) -> Result<Decimal> {
        Ok(self.live_volume(event_id)?.total)
    }

    /// Retrieves the per-market live volume breakdown of an event.
    ///
    /// # Errors
    ///
    /// See [`Self::live_volume`].
    pub fn event_market_volumes(&self, event_id: i64) -> Result<Vec<MarketVolume>> {
        Ok(self.live_volume(event_id)?.markets)
    }
}
