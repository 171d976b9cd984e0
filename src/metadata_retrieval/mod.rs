/// Data structures and traits for TV show metadata retrieval.
///
/// This module provides the normalized show and episode records, the
/// transport seam used to talk to TVmaze, and the fetch/normalize pipeline
/// that turns raw API payloads into those records.
mod fetch;
mod normalize;
mod tvmaze;
mod tvmaze_types;

pub use fetch::fetch_and_normalize;
pub use normalize::{PLACEHOLDER_IMAGE, normalize_episodes, normalize_shows};
pub use tvmaze::{
    ERROR_IMAGE, TvMazeTransport, encode_query, episode_listing_messages, episodes_endpoint,
    search_endpoint, show_search_messages,
};
pub use tvmaze_types::{RawEpisode, RawImage, RawShow, RawShowWrapper};

use crate::envelope::ErrorEnvelope;
use serde::Serialize;
use thiserror::Error;

/// Either the full list of normalized records or exactly one envelope.
pub type Outcome<T> = Result<Vec<T>, ErrorEnvelope>;

/// Errors that can occur while talking to the metadata provider.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body could not be read or decoded
    #[error("Failed to read API response: {0}")]
    Body(String),
}

/// A raw HTTP response: status code plus the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for anything that can perform a single HTTP GET.
///
/// The pipeline only needs the status code and the body text, which keeps
/// it independent of the HTTP client in use.
pub trait Transport {
    /// Issues a GET request to `url` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed at all.
    /// Non-200 statuses are not errors at this level.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// A TV show as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Show {
    /// TVmaze show id
    pub id: u64,
    /// The show's display name (TVmaze may omit it)
    pub name: Option<String>,
    /// HTML summary, copied as delivered (TVmaze may omit it)
    pub summary: Option<String>,
    /// Medium-size poster URL, or the placeholder image; never empty
    pub image: String,
}

/// A single episode of a TV show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    /// TVmaze episode id
    pub id: u64,
    /// The episode title (null for untitled episodes)
    pub name: Option<String>,
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season (absent for specials)
    pub number: Option<u32>,
    /// HTML summary, copied as delivered
    pub summary: Option<String>,
    /// Link to the episode page on TVmaze
    pub url: Option<String>,
}
