//! Gamma API operations on [`Client`].
//!
//! # Example
//!
//! ```no_run
//! use polymarket_gamma_client::Client;
//! use polymarket_gamma_client::gamma::types::request::SearchRequest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let market = client.market_by_slug("will-it-rain-tomorrow")?;
//! println!("{:?}", market.question);
//!
//! let events = client.search_events("election", &SearchRequest::default())?;
//! println!("{} matching events", events.len());
//! # Ok(())
//! # }
//! ```

use super::types::ParentEntityType;
use super::types::request::{
    CommentsRequest, EventByIdRequest, EventsRequest, MarketByIdRequest, MarketsRequest,
    SearchRequest,
};
use super::types::response::{Comment, Event, Market, SearchResults, Tag, UserProfile};
use crate::error::Error;
use crate::query::Query;
use crate::{Client, Result, first_or_not_found};

impl Client {
    /// Retrieves a list of markets with optional filtering.
    ///
    /// An empty list is a valid result.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub fn markets(&self, request: &MarketsRequest) -> Result<Vec<Market>> {
        self.get(self.host(), "markets", Query::Markets(request))
    }

    /// Retrieves a single market by its unique ID.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Status`](crate::error::Kind::Status) error carrying the
    /// 404 if the market does not exist, or any other request failure.
    pub fn market_by_id(&self, request: &MarketByIdRequest) -> Result<Market> {
        self.get(
            self.host(),
            &format!("markets/{}", request.id),
            Query::MarketById(request),
        )
    }

    /// Retrieves a single market by its URL-friendly slug.
    ///
    /// Lists markets filtered by `slug` with a limit of one and returns the first.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::NotFound`](crate::error::Kind::NotFound) error naming the
    /// slug if no market matches, or any error from [`Self::markets`].
    pub fn market_by_slug(&self, slug: &str) -> Result<Market> {
        let request = MarketsRequest::builder().slug(slug).limit(1).build();

        first_or_not_found(self.markets(&request)?, "market", slug)
    }

    /// Retrieves the markets belonging to an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn event_markets(&self, event_id: &str) -> Result<Vec<Market>> {
        let request = MarketsRequest::builder().event_id(event_id).build();

        self.markets(&request)
    }

    /// Retrieves a list of events with optional filtering.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub fn events(&self, request: &EventsRequest) -> Result<Vec<Event>> {
        self.get(self.host(), "events", Query::Events(request))
    }

    /// Retrieves a single event by its unique ID.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Status`](crate::error::Kind::Status) error if the event
    /// does not exist, or any other request failure.
    pub fn event_by_id(&self, request: &EventByIdRequest) -> Result<Event> {
        self.get(
            self.host(),
            &format!("events/{}", request.id),
            Query::EventById(request),
        )
    }

    /// Retrieves a single event by its URL-friendly slug.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::NotFound`](crate::error::Kind::NotFound) error naming the
    /// slug if no event matches, or any error from [`Self::events`].
    pub fn event_by_slug(&self, slug: &str) -> Result<Event> {
        let request = EventsRequest::builder()
            .slug(vec![slug.to_owned()])
            .limit(1)
            .build();

        first_or_not_found(self.events(&request)?, "event", slug)
    }

    /// Retrieves a list of comments with optional filtering.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn comments(&self, request: &CommentsRequest) -> Result<Vec<Comment>> {
        self.get(self.host(), "comments", Query::Comments(request))
    }

    /// Retrieves comments attached to one entity.
    ///
    /// `parent_entity_type` and `parent_entity_id` replace whatever `request` had
    /// for those fields. The remaining options are sent unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn comments_for(
        &self,
        parent_entity_type: ParentEntityType,
        parent_entity_id: i64,
        request: &CommentsRequest,
    ) -> Result<Vec<Comment>> {
        let mut request = request.clone();
        request.parent_entity_type = Some(parent_entity_type);
        request.parent_entity_id = Some(parent_entity_id);

        self.comments(&request)
    }

    /// Retrieves comments on a market.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn market_comments(
        &self,
        market_id: i64,
        request: &CommentsRequest,
    ) -> Result<Vec<Comment>> {
        self.comments_for(ParentEntityType::Market, market_id, request)
    }

    /// Retrieves comments on an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn event_comments(
        &self,
        event_id: i64,
        request: &CommentsRequest,
    ) -> Result<Vec<Comment>> {
        self.comments_for(ParentEntityType::Event, event_id, request)
    }

    /// Retrieves comments on a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn series_comments(
        &self,
        series_id: i64,
        request: &CommentsRequest,
    ) -> Result<Vec<Comment>> {
        self.comments_for(ParentEntityType::Series, series_id, request)
    }

    /// Searches events, tags and profiles.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Validation`](crate::error::Kind::Validation) error without
    /// sending anything if `q` is empty, or an error if the request fails.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        if request.q.is_empty() {
            return Err(Error::validation("search query (q) is required"));
        }

        self.get(self.host(), "public-search", Query::Search(request))
    }

    /// Searches events only.
    ///
    /// Forces `search_tags` and `search_profiles` off. `query` replaces `request.q`.
    ///
    /// # Errors
    ///
    /// See [`Self::search`].
    pub fn search_events(&self, query: &str, request: &SearchRequest) -> Result<Vec<Event>> {
        let results = self.search_with(query, request, false, false)?;

        Ok(results.events.unwrap_or_default())
    }

    /// Searches user profiles only.
    ///
    /// # Errors
    ///
    /// See [`Self::search`].
    pub fn search_profiles(
        &self,
        query: &str,
        request: &SearchRequest,
    ) -> Result<Vec<UserProfile>> {
        let results = self.search_with(query, request, false, true)?;

        Ok(results.profiles.unwrap_or_default())
    }

    /// Searches tags only.
    ///
    /// # Errors
    ///
    /// See [`Self::search`].
    pub fn search_tags(&self, query: &str, request: &SearchRequest) -> Result<Vec<Tag>> {
        let results = self.search_with(query, request, true, false)?;

        Ok(results.tags.unwrap_or_default())
    }

    /// Searches events carrying any of `tags`.
    ///
    /// `query` and `tags` replace `request.q` and `request.events_tag`. Every
    /// other option, including `search_tags` and `search_profiles`, is sent as
    /// given.
    ///
    /// # Errors
    ///
    /// See [`Self::search`].
    pub fn search_by_tag(
        &self,
        query: &str,
        tags: &[String],
        request: &SearchRequest,
    ) -> Result<Vec<Event>> {
        let mut request = request.clone();
        query.clone_into(&mut request.q);
        request.events_tag = tags.to_vec();

        let results = self.search(&request)?;

        Ok(results.events.unwrap_or_default())
    }

    fn search_with(
        &self,
        query: &str,
        request: &SearchRequest,
        search_tags: bool,
        search_profiles: bool,
    ) -> Result<SearchResults> {
        let mut request = request.clone();
        query.clone_into(&mut request.q);
        request.search_tags = Some(search_tags);
        request.search_profiles = Some(search_profiles);

        self.search(&request)
    }
}
