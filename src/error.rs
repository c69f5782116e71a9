use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;

/// Maximum number of characters of a response body kept in a [`Decode`] error.
const FRAGMENT_LEN: usize = 256;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Caller input rejected before any request was sent
    Validation,
    /// Request construction or network failure (bad host, connect, timeout, TLS)
    Transport,
    /// Error related to non-successful HTTP call
    Status,
    /// Successful response whose body does not match the expected shape
    Decode,
    /// Secondary-key or single-element lookup that matched nothing
    NotFound,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// Returns the HTTP status code when this is a [`Kind::Status`] error.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        self.downcast_ref::<Status>().map(|s| s.status_code)
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        Status {
            status_code,
            method,
            path,
            message: message.into(),
        }
        .into()
    }

    pub fn not_found<S: Into<String>>(resource: &'static str, key: S) -> Self {
        NotFound {
            resource,
            key: key.into(),
        }
        .into()
    }

    #[must_use]
    pub fn decode(source: serde_json::Error, body: &[u8]) -> Self {
        Decode {
            fragment: String::from_utf8_lossy(body)
                .chars()
                .take(FRAGMENT_LEN)
                .collect(),
            source,
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// A non-success response from the remote service.
///
/// `status_code` is always the code observed on the HTTP response, even when the
/// body carried a code of its own.
#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub message: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// A lookup derived from a list call (by slug, or a single live volume entry)
/// that produced no results. Distinct from a remote 404.
#[non_exhaustive]
#[derive(Debug)]
pub struct NotFound {
    pub resource: &'static str,
    pub key: String,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not found for {}", self.resource, self.key)
    }
}

impl StdError for NotFound {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Decode {
    /// Leading part of the body that failed to decode
    pub fragment: String,
    source: serde_json::Error,
}

impl fmt::Display for Decode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to decode response ({}) from {}",
            self.source, self.fragment
        )
    }
}

impl StdError for Decode {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Transport, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Transport, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

impl From<NotFound> for Error {
    fn from(err: NotFound) -> Self {
        Error::with_source(Kind::NotFound, err)
    }
}

impl From<Decode> for Error {
    fn from(err: Decode) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_should_succeed() {
        let error = Error::status(
            StatusCode::NOT_FOUND,
            Method::GET,
            "/markets/1".to_owned(),
            "market not found",
        );

        assert_eq!(error.kind(), Kind::Status);
        assert_eq!(error.status_code(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            error.to_string(),
            "Status: error(404 Not Found) making GET call to /markets/1 with market not found"
        );
    }

    #[test]
    fn not_found_mentions_key() {
        let error = Error::not_found("market", "foo");

        assert_eq!(error.kind(), Kind::NotFound);
        assert_eq!(error.status_code(), None);
        let inner = error.downcast_ref::<NotFound>().expect("missing source");
        assert_eq!(inner.key, "foo");
        assert_eq!(error.to_string(), "NotFound: market not found for foo");
    }

    #[test]
    fn decode_keeps_bounded_fragment_and_source() {
        let body = "x".repeat(1_000);
        let source = serde_json::from_str::<serde_json::Value>(&body).unwrap_err();
        let error = Error::decode(source, body.as_bytes());

        assert_eq!(error.kind(), Kind::Decode);
        let decode = error.downcast_ref::<Decode>().expect("missing source");
        assert_eq!(decode.fragment.chars().count(), FRAGMENT_LEN);
        assert!(
            StdError::source(decode).is_some(),
            "decode error should expose the parse failure"
        );
    }

    #[test]
    fn validation_display_should_succeed() {
        let error = Error::validation("search query is required");

        assert_eq!(error.kind(), Kind::Validation);
        assert_eq!(
            error.to_string(),
            "Validation: invalid: search query is required"
        );
    }
}
