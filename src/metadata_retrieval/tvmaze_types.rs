/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Ids and season numbers are always sent; everything TVMaze may leave
/// null is optional.
use serde::Deserialize;

/// One entry of the `/search/shows` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawShowWrapper {
    /// The matched show
    pub show: Option<RawShow>,
}

/// Show details nested in a search result.
#[derive(Debug, Clone, Deserialize)]
pub struct RawShow {
    pub id: u64,
    pub name: Option<String>,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Poster images (null for shows without artwork)
    pub image: Option<RawImage>,
}

/// Poster image URLs in the sizes TVMaze provides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

/// A single entry of the `/shows/{id}/episodes` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number (0 for specials)
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
    /// Episode summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Link to the episode page on tvmaze.com
    pub url: Option<String>,
}
