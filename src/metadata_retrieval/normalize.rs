//! Record normalizers
//!
//! Converts raw TVMaze payload entries into the internal `Show` and
//! `Episode` records, one record per entry. A search entry without a `show`
//! cannot be mapped; if no entry maps, the result is a single anomaly
//! envelope.

use super::tvmaze::{DIFFICULTIES_HEADLINE, ERROR_IMAGE};
use super::tvmaze_types::{RawEpisode, RawShowWrapper};
use super::{Episode, Outcome, Show};
use crate::envelope::{ErrorKind, build_error};
use tracing::warn;

/// Image used for shows without artwork and for "nothing found" errors.
pub const PLACEHOLDER_IMAGE: &str = "./images/tv-missing.png";

/// Normalizes the entries of a show search response.
///
/// # Arguments
///
/// * `raw_shows` - Entries as returned by `/search/shows`
/// * `query` - The search text, used in the anomaly description
///
/// # Returns
///
/// One `Show` per entry, in input order, or an anomaly envelope if no entry
/// carried a show.
pub fn normalize_shows(raw_shows: Vec<RawShowWrapper>, query: &str) -> Outcome<Show> {
    let raw_count = raw_shows.len();

    let shows: Vec<Show> = raw_shows
        .into_iter()
        .enumerate()
        .filter_map(|(index, wrapper)| {
            let show = convert_show(wrapper);
            if show.is_none() {
                warn!(index, query, "search entry without a show");
            }
            show
        })
        .collect();

    if shows.is_empty() {
        return Err(build_error(
            ErrorKind::NormalizationAnomaly,
            DIFFICULTIES_HEADLINE,
            format!(
                "Something bad happened while processing the {} show(s) found for search of '{}'.",
                raw_count, query
            ),
            ERROR_IMAGE,
        ));
    }

    Ok(shows)
}

/// Normalizes the entries of an episode listing response.
///
/// Fields are copied as delivered; there is no fallback logic for episodes.
pub fn normalize_episodes(raw_episodes: Vec<RawEpisode>, show_name: &str) -> Outcome<Episode> {
    let raw_count = raw_episodes.len();

    let episodes: Vec<Episode> = raw_episodes.into_iter().map(convert_episode).collect();

    if episodes.is_empty() {
        return Err(build_error(
            ErrorKind::NormalizationAnomaly,
            "",
            format!(
                "Something bad happened while processing the {} episode(s) found for \"{}\".",
                raw_count, show_name
            ),
            "",
        ));
    }

    Ok(episodes)
}

/// Converts a search entry to a `Show`, or `None` if it carries no show.
fn convert_show(wrapper: RawShowWrapper) -> Option<Show> {
    let raw = wrapper.show?;

    // A missing image object, one without `medium`, and an empty `medium`
    // all end up as the placeholder.
    let image = raw
        .image
        .and_then(|image| image.medium)
        .filter(|medium| !medium.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    Some(Show {
        id: raw.id,
        name: raw.name,
        summary: raw.summary,
        image,
    })
}

fn convert_episode(raw: RawEpisode) -> Episode {
    Episode {
        id: raw.id,
        name: raw.name,
        season: raw.season,
        number: raw.number,
        summary: raw.summary,
        url: raw.url,
    }
}
