#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod data;
pub mod error;
pub mod gamma;
pub mod query;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::blocking::Request;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

pub use crate::client::{Client, Config};
use crate::error::Error;
use crate::gamma::types::response::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
fn request<Response: DeserializeOwned>(
    client: &reqwest::blocking::Client,
    request: Request,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request)?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let body = response.bytes()?;
    check_status(status_code, method, path, &body)?;

    serde_helpers::decode_body(&body)
}

/// Turns a non-success response into a [`Kind::Status`](error::Kind::Status) error.
///
/// The message comes from the service's JSON error body when it has one, and
/// otherwise embeds the raw body. The status code is always the one observed on
/// the response, never a code carried in the body.
pub(crate) fn check_status(
    status_code: StatusCode,
    method: Method,
    path: String,
    body: &[u8],
) -> Result<()> {
    if status_code.is_success() {
        return Ok(());
    }

    let message = match serde_json::from_slice::<ApiError>(body) {
        Ok(api_error) => api_error.message,
        Err(_) => format!(
            "API returned status {}: {}",
            status_code.as_u16(),
            String::from_utf8_lossy(body)
        ),
    };

    #[cfg(feature = "tracing")]
    tracing::warn!(
        status = %status_code,
        method = %method,
        path = %path,
        message = %message,
        "API request failed"
    );

    Err(Error::status(status_code, method, path, message))
}

/// Returns the first of `items`, or a [`Kind::NotFound`](error::Kind::NotFound) error
/// scoped to `key` when there are none.
pub(crate) fn first_or_not_found<T>(
    items: Vec<T>,
    resource: &'static str,
    key: &str,
) -> Result<T> {
    items.into_iter().next().ok_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::warn!(resource, key, "lookup returned no results");

        Error::not_found(resource, key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Kind, Status};

    fn status_of(err: &Error) -> &Status {
        err.downcast_ref::<Status>().expect("missing status source")
    }

    #[test]
    fn success_passes_through() {
        for code in [StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT] {
            check_status(code, Method::GET, "/markets".to_owned(), b"[]")
                .expect("2xx should be accepted");
        }
    }

    #[test]
    fn unparseable_body_is_embedded() {
        let err = check_status(
            StatusCode::NOT_FOUND,
            Method::GET,
            "/markets/1".to_owned(),
            b"<html>nope</html>",
        )
        .unwrap_err();

        assert_eq!(err.kind(), Kind::Status);
        assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            status_of(&err).message,
            "API returned status 404: <html>nope</html>"
        );
    }

    #[test]
    fn structured_body_uses_transport_code() {
        let err = check_status(
            StatusCode::BAD_REQUEST,
            Method::GET,
            "/public-search".to_owned(),
            br#"{"code": 999, "message": "bad query"}"#,
        )
        .unwrap_err();

        assert_eq!(err.status_code(), Some(StatusCode::BAD_REQUEST));
        let status = status_of(&err);
        assert_eq!(status.message, "bad query");
        assert_eq!(status.path, "/public-search");
    }

    #[test]
    fn error_key_is_accepted_as_message() {
        let err = check_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Method::GET,
            "/events".to_owned(),
            br#"{"error": "upstream timeout"}"#,
        )
        .unwrap_err();

        assert_eq!(err.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(status_of(&err).message, "upstream timeout");
    }

    #[test]
    fn body_without_message_falls_back_to_raw_text() {
        let err = check_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Method::GET,
            "/markets".to_owned(),
            br#"{"code":500}"#,
        )
        .unwrap_err();

        assert_eq!(err.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            status_of(&err).message,
            r#"API returned status 500: {"code":500}"#
        );
    }
}
