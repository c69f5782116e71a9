//! Encoding of typed request options into URL query pairs.
//!
//! Every options type serializes with [`serde_html_form`], which gives the
//! encoding rules the remote API expects:
//!
//! - `None` fields are skipped (`#[skip_serializing_none]`), so "unset" never
//!   collides with an explicit `0` or `false`.
//! - Booleans encode as `true` / `false`.
//! - `Vec` fields encode as one pair per element under the same key, in order
//!   (`id=1&id=2`). Empty vectors are skipped.
//! - Timestamps encode as RFC 3339.
//!
//! Pairs come out in field declaration order.

use serde::Serialize;
use url::form_urlencoded;

use crate::data::types::request::LiveVolumeRequest;
use crate::gamma::types::request::{
    CommentsRequest, EventByIdRequest, EventsRequest, MarketByIdRequest, MarketsRequest,
    SearchRequest,
};

/// An ordered list of query `(key, value)` pairs. Keys may repeat.
pub type QueryPairs = Vec<(String, String)>;

/// One options value for each request kind the client can issue.
#[expect(
    clippy::exhaustive_enums,
    reason = "New request kinds must be handled everywhere a Query is matched"
)]
#[derive(Debug, Clone, Copy)]
pub enum Query<'req> {
    Markets(&'req MarketsRequest),
    MarketById(&'req MarketByIdRequest),
    Events(&'req EventsRequest),
    EventById(&'req EventByIdRequest),
    Comments(&'req CommentsRequest),
    Search(&'req SearchRequest),
    LiveVolume(&'req LiveVolumeRequest),
}

impl Query<'_> {
    /// Encodes the options into ordered query pairs.
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        match self {
            Query::Markets(request) => encode(request),
            Query::MarketById(request) => encode(request),
            Query::Events(request) => encode(request),
            Query::EventById(request) => encode(request),
            Query::Comments(request) => encode(request),
            Query::Search(request) => encode(request),
            Query::LiveVolume(request) => encode(request),
        }
    }

    /// Encodes the options into a query string without the leading `?`.
    ///
    /// Returns an empty string when no option is set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.pairs());
        serializer.finish()
    }
}

/// Every options type is a flat struct of scalars, strings and sequences, which
/// `serde_html_form` always accepts, so the empty fallback is unreachable.
fn encode<T: Serialize>(request: &T) -> QueryPairs {
    let encoded = serde_html_form::to_string(request)
        .inspect_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Unable to convert to URL-encoded string {e:?}");
            #[cfg(not(feature = "tracing"))]
            let _: &serde_html_form::ser::Error = e;
        })
        .unwrap_or_default();

    form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone as _, Utc};

    use super::*;
    use crate::gamma::types::ParentEntityType;

    fn keys(pairs: &QueryPairs) -> Vec<&str> {
        pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_owned(), value.to_owned())
    }

    #[test]
    fn default_requests_encode_nothing() {
        assert!(Query::Markets(&MarketsRequest::default()).pairs().is_empty(), "markets");
        assert!(Query::Events(&EventsRequest::default()).pairs().is_empty(), "events");
        assert!(Query::Comments(&CommentsRequest::default()).pairs().is_empty(), "comments");
        assert!(
            Query::MarketById(&MarketByIdRequest::builder().id("1").build())
                .pairs()
                .is_empty(),
            "market by id"
        );
        assert!(
            Query::EventById(&EventByIdRequest::builder().id("1").build())
                .pairs()
                .is_empty(),
            "event by id"
        );
        assert_eq!(Query::Markets(&MarketsRequest::default()).to_query_string(), "");
    }

    #[test]
    fn zero_and_false_are_encoded_when_set() {
        let request = MarketsRequest::builder()
            .limit(0)
            .offset(0)
            .ascending(false)
            .active(false)
            .build();

        assert_eq!(
            Query::Markets(&request).pairs(),
            vec![
                pair("limit", "0"),
                pair("offset", "0"),
                pair("ascending", "false"),
                pair("active", "false"),
            ]
        );
    }

    #[test]
    fn markets_follow_declaration_order() {
        let request = MarketsRequest::builder()
            .tag_id("7")
            .slug("will-it-rain")
            .closed(true)
            .limit(5)
            .order("volume")
            .event_id("99")
            .archived(false)
            .build();

        assert_eq!(
            keys(&Query::Markets(&request).pairs()),
            vec!["limit", "order", "closed", "archived", "slug", "event_id", "tag_id"]
        );
    }

    #[test]
    fn multi_valued_fields_repeat_keys_in_order() {
        let request = EventsRequest::builder()
            .id(vec!["3".to_owned(), "1".to_owned(), "2".to_owned()])
            .exclude_tag_id(vec![10, 20])
            .build();

        assert_eq!(
            Query::Events(&request).pairs(),
            vec![
                pair("id", "3"),
                pair("id", "1"),
                pair("id", "2"),
                pair("exclude_tag_id", "10"),
                pair("exclude_tag_id", "20"),
            ]
        );
    }

    #[test]
    fn event_dates_encode_as_rfc3339() {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let request = EventsRequest::builder().start_date_min(start).build();

        let pairs = Query::Events(&request).pairs();
        assert_eq!(keys(&pairs), vec!["start_date_min"]);
        let parsed = DateTime::parse_from_rfc3339(&pairs[0].1).expect("not RFC 3339");
        assert_eq!(parsed, start);
    }

    #[test]
    fn events_encode_full_vocabulary_in_order() {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let request = EventsRequest::builder()
            .limit(10)
            .offset(20)
            .order("startDate")
            .ascending(true)
            .id(vec!["1".to_owned()])
            .slug(vec!["a".to_owned(), "b".to_owned()])
            .active(true)
            .closed(false)
            .archived(false)
            .tag_id(4)
            .exclude_tag_id(vec![5])
            .related_tags(true)
            .featured(true)
            .cyom(false)
            .recurrence("daily")
            .start_date_min(date)
            .start_date_max(date)
            .end_date_min(date)
            .end_date_max(date)
            .build();

        assert_eq!(
            keys(&Query::Events(&request).pairs()),
            vec![
                "limit",
                "offset",
                "order",
                "ascending",
                "id",
                "slug",
                "slug",
                "active",
                "closed",
                "archived",
                "tag_id",
                "exclude_tag_id",
                "related_tags",
                "featured",
                "cyom",
                "recurrence",
                "start_date_min",
                "start_date_max",
                "end_date_min",
                "end_date_max",
            ]
        );
    }

    #[test]
    fn single_fetch_options_skip_path_identifier() {
        let market = MarketByIdRequest::builder().id("42").include_tag(true).build();
        assert_eq!(
            Query::MarketById(&market).pairs(),
            vec![pair("include_tag", "true")]
        );

        let event = EventByIdRequest::builder()
            .id("17")
            .include_chat(false)
            .include_template(true)
            .build();
        assert_eq!(
            Query::EventById(&event).pairs(),
            vec![pair("include_chat", "false"), pair("include_template", "true")]
        );
    }

    #[test]
    fn comments_keep_parent_type_literal() {
        let request = CommentsRequest::builder()
            .parent_entity_type(ParentEntityType::Market)
            .parent_entity_id(12)
            .holders_only(true)
            .build();
        assert_eq!(
            Query::Comments(&request).pairs(),
            vec![
                pair("parent_entity_type", "market"),
                pair("parent_entity_id", "12"),
                pair("holders_only", "true"),
            ]
        );

        let request = CommentsRequest::builder()
            .parent_entity_type(ParentEntityType::Event)
            .build();
        assert_eq!(
            Query::Comments(&request).pairs(),
            vec![pair("parent_entity_type", "Event")]
        );
    }

    #[test]
    fn search_encodes_query_first() {
        let request = SearchRequest::builder()
            .q("us election")
            .page(2)
            .events_tag(vec!["politics".to_owned(), "us".to_owned()])
            .keep_closed_markets(0)
            .search_tags(false)
            .search_profiles(true)
            .build();

        assert_eq!(
            Query::Search(&request).pairs(),
            vec![
                pair("q", "us election"),
                pair("page", "2"),
                pair("events_tag", "politics"),
                pair("events_tag", "us"),
                pair("keep_closed_markets", "0"),
                pair("search_tags", "false"),
                pair("search_profiles", "true"),
            ]
        );
    }

    #[test]
    fn live_volume_repeats_id() {
        let request = LiveVolumeRequest { id: vec![1, 2, 3] };

        assert_eq!(
            Query::LiveVolume(&request).pairs(),
            vec![pair("id", "1"), pair("id", "2"), pair("id", "3")]
        );
        assert_eq!(Query::LiveVolume(&request).to_query_string(), "id=1&id=2&id=3");
    }

    #[test]
    fn query_string_percent_encodes_values() {
        let request = SearchRequest::builder().q("a&b c").build();

        assert_eq!(Query::Search(&request).to_query_string(), "q=a%26b+c");
    }

    #[test]
    fn fully_populated_options_always_encode() {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let markets = MarketsRequest::builder()
            .limit(1)
            .offset(2)
            .order("volume")
            .ascending(true)
            .active(true)
            .closed(false)
            .archived(false)
            .slug("s")
            .event_id("3")
            .tag_id("4")
            .build();
        let events = EventsRequest::builder()
            .id(vec!["1".to_owned()])
            .slug(vec!["a".to_owned()])
            .exclude_tag_id(vec![5])
            .start_date_min(date)
            .end_date_max(date)
            .build();
        let comments = CommentsRequest::builder()
            .parent_entity_type(ParentEntityType::Unknown("Other".to_owned()))
            .parent_entity_id(1)
            .get_positions(true)
            .build();
        let search = SearchRequest::builder()
            .q("x")
            .sort("volume")
            .events_status("active")
            .events_tag(vec!["t".to_owned()])
            .exclude_tag_id(vec![1, 2])
            .optimized(true)
            .build();

        assert!(serde_html_form::to_string(&markets).is_ok(), "markets");
        assert!(serde_html_form::to_string(&events).is_ok(), "events");
        assert!(serde_html_form::to_string(&comments).is_ok(), "comments");
        assert!(serde_html_form::to_string(&search).is_ok(), "search");
        assert_eq!(
            Query::Comments(&comments).pairs()[0],
            pair("parent_entity_type", "Other")
        );
    }
}
