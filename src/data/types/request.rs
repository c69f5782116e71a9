use bon::Builder;
use serde::Serialize;

use crate::error::Error;

/// Request parameters for the `/live-volume` endpoint.
///
/// Each id is sent as its own `id` pair, in order. Ids must be positive; the
/// [`Client`](crate::Client) rejects the request before sending it otherwise.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct LiveVolumeRequest {
    /// Event IDs (at least one).
    #[builder(default)]
    pub id: Vec<i64>,
}

impl LiveVolumeRequest {
    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.id.is_empty() {
            return Err(Error::validation("at least one event ID is required"));
        }
        if let Some(id) = self.id.iter().find(|id| **id < 1) {
            return Err(Error::validation(format!(
                "event IDs must be >= 1, got {id}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LiveVolumeRequest;
    use crate::error::Kind;

    #[test]
    fn validate_accepts_positive_ids() {
        let request = LiveVolumeRequest::builder().id(vec![1, 2, 3]).build();

        request.validate().expect("positive ids should be accepted");
    }

    #[test]
    fn validate_rejects_empty_ids() {
        let err = LiveVolumeRequest::builder().build().validate().unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
    }

    #[test]
    fn validate_rejects_non_positive_ids() {
        for bad in [0, -5] {
            let request = LiveVolumeRequest::builder().id(vec![4, bad]).build();
            let err = request.validate().unwrap_err();

            assert_eq!(err.kind(), Kind::Validation);
            assert!(
                err.to_string().contains(&format!("got {bad}")),
                "error should name the offending id: {err}"
            );
        }
    }
}
