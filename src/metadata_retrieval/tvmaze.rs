/// TVMaze specifics: the HTTP transport, endpoint URLs and the error
/// message sets used by the two queries.
use super::normalize::PLACEHOLDER_IMAGE;
use super::{HttpResponse, Transport, TransportError};
use crate::envelope::{ErrorMessage, ErrorMessages};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Image used for operational errors.
pub const ERROR_IMAGE: &str = "./images/VectorStock.com-18175384.jpg";

/// Headline shared by all operational errors.
pub(crate) const DIFFICULTIES_HEADLINE: &str = "We are experiencing operating difficulties...";

/// Characters left as-is in the search query: the RFC 3986 unreserved set.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// HTTP transport for the TVMaze API.
///
/// Performs plain blocking GET requests. No timeout is configured beyond
/// what the underlying client does by default.
pub struct TvMazeTransport {
    client: reqwest::blocking::Client,
}

impl TvMazeTransport {
    /// Creates a new TVMaze transport instance.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for TvMazeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for TvMazeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Prepares a search query for use in a URL.
///
/// Apostrophes and double quotes are removed, the rest is percent-encoded
/// (a space becomes `%20`).
pub fn encode_query(query: &str) -> String {
    let cleaned: String = query.chars().filter(|c| *c != '\'' && *c != '"').collect();
    utf8_percent_encode(&cleaned, QUERY_ENCODE_SET).to_string()
}

/// URL of the show search for `query`.
pub fn search_endpoint(api_base: &str, query: &str) -> String {
    format!("{}/search/shows?q={}", api_base, encode_query(query))
}

/// URL of the episode listing for the show with `show_id`.
pub fn episodes_endpoint(api_base: &str, show_id: u64) -> String {
    format!("{}/shows/{}/episodes", api_base, show_id)
}

/// Error texts for a show search.
pub fn show_search_messages(query: &str) -> ErrorMessages {
    ErrorMessages {
        not_found: ErrorMessage::new(
            "Oh SNAP!",
            format!(
                "No shows were found for '{}'. Please change your search and try again. ",
                query
            ),
            PLACEHOLDER_IMAGE,
        ),
        not_ok: ErrorMessage::new(
            DIFFICULTIES_HEADLINE,
            format!("Show search for '{}' was not successful. ", query),
            ERROR_IMAGE,
        ),
        unexpected: ErrorMessage::new(
            DIFFICULTIES_HEADLINE,
            format!("Search for '{}' was not performed.", query),
            ERROR_IMAGE,
        ),
    }
}

/// Error texts for an episode listing.
///
/// Episode errors are shown inline in the list, so headline and image stay
/// blank.
pub fn episode_listing_messages(show_name: &str) -> ErrorMessages {
    ErrorMessages {
        not_found: ErrorMessage::new(
            "",
            format!("No episodes were found for '{}'. ", show_name),
            "",
        ),
        not_ok: ErrorMessage::new(
            "",
            format!("Episode listing for '{}' was not successful. ", show_name),
            "",
        ),
        unexpected: ErrorMessage::new(
            "",
            format!("Episode listing for '{}' was not performed.", show_name),
            "",
        ),
    }
}
