#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::gamma::types::ParentEntityType;

/// Options for `GET /markets`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct MarketsRequest {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    #[builder(into)]
    pub slug: Option<String>,
    #[builder(into)]
    pub event_id: Option<String>,
    #[builder(into)]
    pub tag_id: Option<String>,
}

/// Options for `GET /markets/{id}`. The id is part of the path.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct MarketByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub include_tag: Option<bool>,
}

/// Options for `GET /events`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct EventsRequest {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub tag_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub exclude_tag_id: Vec<i64>,
    pub related_tags: Option<bool>,
    pub featured: Option<bool>,
    pub cyom: Option<bool>,
    #[builder(into)]
    pub recurrence: Option<String>,
    pub start_date_min: Option<DateTime<Utc>>,
    pub start_date_max: Option<DateTime<Utc>>,
    pub end_date_min: Option<DateTime<Utc>>,
    pub end_date_max: Option<DateTime<Utc>>,
}

/// Options for `GET /events/{id}`. The id is part of the path.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct EventByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub include_chat: Option<bool>,
    pub include_template: Option<bool>,
}

/// Options for `GET /comments`.
///
/// `parent_entity_type` and `parent_entity_id` only narrow results when both
/// are set; the entity-scoped helpers on [`Client`](crate::Client) set them
/// together.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct CommentsRequest {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    pub parent_entity_type: Option<ParentEntityType>,
    pub parent_entity_id: Option<i64>,
    pub get_positions: Option<bool>,
    pub holders_only: Option<bool>,
}

/// Options for `GET /public-search`.
///
/// `q` must be non-empty; [`Client::search`](crate::Client::search) rejects
/// the request before sending it otherwise.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct SearchRequest {
    #[builder(into, default)]
    pub q: String,
    pub page: Option<i32>,
    pub limit_per_type: Option<i32>,
    #[builder(into)]
    pub sort: Option<String>,
    pub ascending: Option<bool>,
    pub cache: Option<bool>,
    #[builder(into)]
    pub events_status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub events_tag: Vec<String>,
    pub keep_closed_markets: Option<i32>,
    pub search_tags: Option<bool>,
    pub search_profiles: Option<bool>,
    #[builder(into)]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub exclude_tag_id: Vec<i64>,
    pub optimized: Option<bool>,
}
