//! Blocking HTTP client shared by the Gamma and Data API operations.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use polymarket_gamma_client::{Client, Config};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Default hosts, 30 second timeout
//! let client = Client::default();
//!
//! // Custom hosts and timeout
//! let config = Config::builder()
//!     .data_host("https://data-api.example.com")
//!     .timeout(Duration::from_secs(5))
//!     .build();
//! let client = Client::new("https://gamma-api.example.com", config)?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use bon::Builder;
use reqwest::Method;
use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::Result;
use crate::query::Query;

/// The default Gamma (metadata) API host.
pub const DEFAULT_HOST: &str = "https://gamma-api.polymarket.com";

/// The default Data (statistics) API host, used for live volume.
pub const DEFAULT_DATA_HOST: &str = "https://data-api.polymarket.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Value of the `User-Agent` header sent with every request.
pub const CLIENT_USER_AGENT: &str = concat!("polymarket_gamma_client/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Override for the statistics API host. Defaults to `https://data-api.polymarket.com`.
    /// This is primarily useful for testing.
    #[builder(into)]
    data_host: Option<String>,
    /// How long a request may take, from connect to the end of the body. The default is thirty
    /// (30) seconds.
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

/// Blocking client for the Polymarket Gamma API and live volume statistics.
///
/// Holds no state beyond its hosts and timeout, so one instance can be shared
/// across threads and used concurrently. Every call blocks until the response
/// arrives or the timeout elapses. Nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct Client {
    /// The [`Url`] of the Gamma metadata service.
    host: Url,
    /// The [`Url`] of the statistics service.
    data_host: Url,
    timeout: Duration,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new client against the Gamma API at `host`.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Transport`](crate::error::Kind::Transport) error if either host
    /// is not a valid URL or the HTTP client cannot be created.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        let data_host = config.data_host.as_deref().unwrap_or(DEFAULT_DATA_HOST);

        Ok(Self {
            host: Url::parse(host)?,
            data_host: Url::parse(data_host)?,
            timeout: config.timeout,
            client,
        })
    }

    /// Returns the base URL of the Gamma API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Returns the base URL of the statistics API.
    #[must_use]
    pub fn data_host(&self) -> &Url {
        &self.data_host
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Changes the per-request timeout for subsequent requests.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub(crate) fn get<Res: DeserializeOwned>(
        &self,
        host: &Url,
        path: &str,
        query: Query<'_>,
    ) -> Result<Res> {
        let url = endpoint(host, path, &query.pairs())?;
        let request = self
            .client
            .request(Method::GET, url)
            .timeout(self.timeout)
            .build()?;
        crate::request(&self.client, request)
    }
}

/// Joins `host` and `path`, then appends the query pairs if there are any.
pub(crate) fn endpoint(host: &Url, path: &str, pairs: &[(String, String)]) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}/{}",
        host.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    ))?;

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url)
}
