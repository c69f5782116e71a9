#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::json::JsonString;
use serde_with::{NoneAsEmptyString, OneOrMany, serde_as};

use crate::gamma::types::ParentEntityType;
use crate::serde_helpers::StringFromAny;
use crate::types::Decimal;

/// Error body returned alongside non-success status codes.
///
/// The service names the text either `message` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(alias = "error")]
    pub message: String,
}

/// Pagination information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Pagination {
    pub has_more: Option<bool>,
    pub total_results: Option<i32>,
}

/// A tag for categorizing markets and events.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Tag {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    #[serde(alias = "label")]
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// A category for organizing markets and events.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Category {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    #[serde(alias = "label")]
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// One side of a binary outcome.
///
/// `price` lies in `[0, 1]`; a winning token redeems for one unit of collateral.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Token {
    #[serde_as(as = "Option<StringFromAny>")]
    pub id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub token_id: Option<String>,
    pub outcome: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub price: Option<Decimal>,
    pub winner: Option<bool>,
}

/// A prediction market.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Market {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    pub question: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub market_type: Option<String>,
    #[serde_as(as = "Option<JsonString>")]
    pub outcomes: Option<Vec<String>>,
    /// Display volume, as formatted by the service.
    #[serde_as(as = "Option<StringFromAny>")]
    pub volume: Option<String>,
    pub volume_24hr: Option<Decimal>,
    pub liquidity_num: Option<Decimal>,
    pub tokens: Option<Vec<Token>>,
    pub events: Option<Vec<Event>>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
    pub condition_id: Option<String>,
    #[serde(rename = "questionID", alias = "questionId")]
    pub question_id: Option<String>,
    pub market_maker_address: Option<String>,
    pub uma_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A series of related events, such as a recurring weekly market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Series {
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub recurrence: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
}

/// A group of markets sharing one subject.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Event {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub featured: Option<bool>,
    pub volume: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub liquidity: Option<Decimal>,
    pub comments_enabled: Option<bool>,
    pub neg_risk: Option<bool>,
    pub automatically_resolved: Option<bool>,
    pub cyom: Option<bool>,
    pub markets: Option<Vec<Market>>,
    /// The service sends an array; a lone object is accepted too.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub series: Option<Vec<Series>>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
    pub recurrence: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// The series this event belongs to, if any.
    #[must_use]
    pub fn parent_series(&self) -> Option<&Series> {
        self.series.as_ref().and_then(|series| series.first())
    }
}

/// Public profile attributes of a user.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UserProfile {
    #[serde_as(as = "Option<StringFromAny>")]
    pub id: Option<String>,
    #[serde(alias = "name")]
    pub username: Option<String>,
    #[serde(alias = "pseudonym")]
    pub display_name: Option<String>,
    #[serde(alias = "profileImage")]
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    #[serde(alias = "verifiedBadge")]
    pub verified: Option<bool>,
    pub proxy_wallet: Option<String>,
}

/// A reaction to a comment.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Reaction {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    #[serde(alias = "type")]
    pub reaction_type: Option<String>,
    pub user_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment on a market, event, or series.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Comment {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    pub body: Option<String>,
    pub parent_entity_type: Option<ParentEntityType>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "parentEntityID")]
    pub parent_entity_id: Option<String>,
    pub user_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub profile: Option<UserProfile>,
    pub reactions: Option<Vec<Reaction>>,
    pub report_count: Option<i32>,
    pub reaction_count: Option<i32>,
}

impl Comment {
    /// The entity this comment belongs to. `None` unless both type and id are set.
    #[must_use]
    pub fn parent(&self) -> Option<(&ParentEntityType, &str)> {
        Some((
            self.parent_entity_type.as_ref()?,
            self.parent_entity_id.as_deref()?,
        ))
    }
}

/// Results of `GET /public-search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct SearchResults {
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<Tag>>,
    pub profiles: Option<Vec<UserProfile>>,
    pub pagination: Option<Pagination>,
}
