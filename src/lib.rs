//! show_finder - Search TVmaze for shows and list their episodes
//!
//! This library fetches show and episode metadata from the TVmaze API,
//! normalizes the loosely shaped responses into fixed records, and reports
//! every kind of failure as a single error envelope that flows through the
//! same path as real results.

mod config;
mod envelope;
mod metadata_retrieval;
pub mod presentation;

pub use config::{Config, ConfigError, DEFAULT_API_BASE};
pub use envelope::{ERROR_ID, ErrorEnvelope, ErrorKind, ErrorMessage, ErrorMessages, build_error};
pub use metadata_retrieval::{
    ERROR_IMAGE, Episode, HttpResponse, Outcome, PLACEHOLDER_IMAGE, RawEpisode, RawImage, RawShow,
    RawShowWrapper, Show, Transport, TransportError, TvMazeTransport, encode_query,
    episode_listing_messages, episodes_endpoint, fetch_and_normalize, normalize_episodes,
    normalize_shows, search_endpoint, show_search_messages,
};

use thiserror::Error;
use tracing::{debug, info};

/// Top-level error type for show_finder setup
///
/// Query failures never show up here; they are returned as envelopes.
#[derive(Debug, Error)]
pub enum ShowFinderError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Entry points for the two user actions: searching shows and listing the
/// episodes of one show.
///
/// Both actions return an [`Outcome`]: either the complete list of records
/// or exactly one [`ErrorEnvelope`]. Callers never need any other error
/// handling.
///
/// # Examples
///
/// ```no_run
/// use show_finder::{Config, ShowFinder, TvMazeTransport};
///
/// let finder = ShowFinder::new(TvMazeTransport::new(), Config::default());
///
/// match finder.search_shows("batman") {
///     Ok(shows) => {
///         for show in shows {
///             println!("{} ({})", show.name.unwrap_or_default(), show.id);
///         }
///     }
///     Err(envelope) => eprintln!("{}: {}", envelope.headline, envelope.description),
/// }
/// ```
pub struct ShowFinder<T>
where
    T: Transport,
{
    transport: T,
    config: Config,
}

impl<T> ShowFinder<T>
where
    T: Transport,
{
    /// Creates a new finder using the given transport and configuration.
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Searches TVmaze for shows matching `query`.
    ///
    /// Leading and trailing whitespace is ignored. A blank query is
    /// answered with a "nothing found" envelope without contacting TVmaze.
    pub fn search_shows(&self, query: &str) -> Outcome<Show> {
        let query = query.trim();
        let messages = show_search_messages(query);

        if query.is_empty() {
            return Err(messages
                .not_found
                .to_envelope(ErrorKind::NothingFound, "Please enter a show to search for."));
        }

        info!(query, "searching shows");
        let endpoint = search_endpoint(&self.config.api_base, query);
        let outcome = fetch_and_normalize(
            &self.transport,
            &endpoint,
            &messages,
            normalize_shows,
            query,
        );
        log_outcome(&outcome);
        outcome
    }

    /// Lists the episodes of the show with `show_id`.
    ///
    /// `show_name` is only used in error descriptions. A show id of 0 is
    /// never valid on TVmaze and is answered without a request.
    pub fn list_episodes(&self, show_id: u64, show_name: &str) -> Outcome<Episode> {
        let messages = episode_listing_messages(show_name);

        if show_id == 0 {
            return Err(messages.not_found.to_envelope(
                ErrorKind::NothingFound,
                messages.not_found.description.trim_end(),
            ));
        }

        info!(show_id, show_name, "listing episodes");
        let endpoint = episodes_endpoint(&self.config.api_base, show_id);
        let outcome = fetch_and_normalize(
            &self.transport,
            &endpoint,
            &messages,
            normalize_episodes,
            show_name,
        );
        log_outcome(&outcome);
        outcome
    }
}

fn log_outcome<R>(outcome: &Outcome<R>) {
    match outcome {
        Ok(records) => debug!(count = records.len(), "query succeeded"),
        Err(envelope) => debug!(kind = %envelope.kind, "query produced an error envelope"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata_retrieval::test_support::StubTransport;

    fn finder(transport: StubTransport) -> ShowFinder<StubTransport> {
        ShowFinder::new(transport, Config::default())
    }

    #[test]
    fn test_search_returns_every_show() {
        let body = serde_json::json!([
            {"score": 0.9, "show": {"id": 975, "name": "Batman", "summary": "<p>Caped.</p>", "image": {"medium": "a.jpg", "original": "A.jpg"}}},
            {"score": 0.8, "show": {"id": 481, "name": "The Batman", "summary": null, "image": null}},
            {"score": 0.7, "show": {"id": 20, "name": "Batman Beyond", "summary": "<p>Future.</p>", "image": {}}}
        ])
        .to_string();
        let finder = finder(StubTransport::respond(200, &body));

        let shows = finder.search_shows("batman").unwrap();

        assert_eq!(shows.len(), 3);
        assert_eq!(
            shows.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![975, 481, 20]
        );
        assert_eq!(shows[1].image, PLACEHOLDER_IMAGE);
        assert_eq!(shows[2].image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_search_without_results() {
        let finder = finder(StubTransport::respond(200, "[]"));

        let envelope = finder.search_shows("zzzznonexistentshow").unwrap_err();

        assert_eq!(
            envelope,
            ErrorEnvelope {
                kind: ErrorKind::NothingFound,
                headline: "Oh SNAP!".to_string(),
                description: "No shows were found for 'zzzznonexistentshow'. Please change your search and try again. TVmaze response code = 200.".to_string(),
                image: PLACEHOLDER_IMAGE.to_string(),
            }
        );
    }

    #[test]
    fn test_search_builds_encoded_https_url() {
        let transport = StubTransport::respond(200, "[]");
        let finder = finder(transport);

        let _ = finder.search_shows("  grey's anatomy ");

        assert_eq!(
            finder.transport.requested(),
            vec!["https://api.tvmaze.com/search/shows?q=greys%20anatomy".to_string()]
        );
    }

    #[test]
    fn test_blank_search_makes_no_request() {
        let finder = finder(StubTransport::respond(200, "[]"));

        let envelope = finder.search_shows("   ").unwrap_err();

        assert_eq!(envelope.kind, ErrorKind::NothingFound);
        assert_eq!(envelope.description, "Please enter a show to search for.");
        assert!(finder.transport.requested().is_empty());
    }

    #[test]
    fn test_search_transport_fault() {
        let finder = finder(StubTransport::fail("dns error"));

        let envelope = finder.search_shows("batman").unwrap_err();

        assert_eq!(envelope.kind, ErrorKind::TransportFault);
        assert_eq!(envelope.headline, "We are experiencing operating difficulties...");
        assert_eq!(envelope.image, ERROR_IMAGE);
        assert!(envelope.description.contains("dns error"));
        assert!(envelope.description.ends_with("Search for 'batman' was not performed."));
    }

    #[test]
    fn test_episode_listing_unavailable() {
        let finder = finder(StubTransport::respond(503, "Service Unavailable"));

        let envelope = finder.list_episodes(5, "Lost").unwrap_err();

        assert_eq!(envelope.kind, ErrorKind::NonSuccessStatus(503));
        assert_eq!(
            envelope.description,
            "Episode listing for 'Lost' was not successful. TVmaze response code = 503."
        );
        assert!(envelope.headline.is_empty());
        assert_eq!(
            finder.transport.requested(),
            vec!["https://api.tvmaze.com/shows/5/episodes".to_string()]
        );
    }

    #[test]
    fn test_episode_listing_success() {
        let body = serde_json::json!([
            {"id": 1, "name": "Pilot", "season": 1, "number": 1, "summary": "<p>One</p>", "url": "https://www.tvmaze.com/episodes/1"},
            {"id": 2, "name": "Second", "season": 1, "number": 2, "summary": null, "url": "https://www.tvmaze.com/episodes/2"}
        ])
        .to_string();
        let finder = finder(StubTransport::respond(200, &body));

        let episodes = finder.list_episodes(5, "Lost").unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].name.as_deref(), Some("Second"));
    }

    #[test]
    fn test_episode_listing_keeps_untitled_episodes() {
        let body = serde_json::json!([
            {"id": 1, "name": "Pilot", "season": 1, "number": 1, "summary": null, "url": "u1"},
            {"id": 2, "name": null, "season": 1, "number": 2, "summary": null, "url": "u2"},
            {"id": 3, "name": "Third", "season": 1, "number": 3, "summary": null, "url": "u3"}
        ])
        .to_string();
        let finder = finder(StubTransport::respond(200, &body));

        let episodes = finder.list_episodes(5, "Lost").unwrap();

        assert_eq!(episodes.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(episodes[1].name, None);
    }

    #[test]
    fn test_episode_listing_for_invalid_show_id() {
        let finder = finder(StubTransport::respond(200, "[]"));

        let envelope = finder.list_episodes(0, "Nothing").unwrap_err();

        assert_eq!(envelope.kind, ErrorKind::NothingFound);
        assert_eq!(envelope.description, "No episodes were found for 'Nothing'.");
        assert!(finder.transport.requested().is_empty());
    }

    #[test]
    fn test_setup_error_from_invalid_api_base() {
        let error: ShowFinderError = Config::new("api.tvmaze.com").unwrap_err().into();

        assert!(matches!(error, ShowFinderError::Config(ConfigError::InvalidApiBase(_))));
        assert!(error.to_string().starts_with("Configuration error: Invalid API base URL"));
    }

    #[test]
    fn test_custom_api_base() {
        let transport = StubTransport::respond(200, "[]");
        let finder = ShowFinder::new(transport, Config::new("http://localhost:9000/").unwrap());

        let _ = finder.list_episodes(7, "Seven");

        assert_eq!(
            finder.transport.requested(),
            vec!["http://localhost:9000/shows/7/episodes".to_string()]
        );
    }
}
