//! Terminal rendering of query outcomes
//!
//! An outcome is rendered either as the full list of records or as exactly
//! one error entry. The "view episodes" hint is only shown next to real
//! shows.

use crate::envelope::ErrorEnvelope;
use crate::metadata_retrieval::{Episode, Outcome, Show};
use std::fmt::Write;

/// Renders the result of a show search as a list of cards.
pub fn render_shows(outcome: &Outcome<Show>) -> String {
    let mut out = String::new();

    match outcome {
        Ok(shows) => {
            for show in shows {
                let name = display_name(show.name.as_deref());
                let _ = writeln!(out, "[{}] {}", show.id, name);
                if let Some(summary) = summary_text(show.summary.as_deref()) {
                    let _ = writeln!(out, "  {}", summary);
                }
                let _ = writeln!(out, "  Image: {}", show.image);
                let _ = writeln!(
                    out,
                    "  Episodes: show_finder episodes {} \"{}\"",
                    show.id, name
                );
                out.push('\n');
            }
        }
        Err(envelope) => render_error_card(&mut out, envelope),
    }

    out
}

/// Renders the result of an episode listing.
///
/// Successful listings end with an episode counter; errors are shown as a
/// single inline entry without one.
pub fn render_episodes(outcome: &Outcome<Episode>, show_id: u64, show_name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\"{}\" Episodes", show_name);

    match outcome {
        Ok(episodes) => {
            for episode in episodes {
                let position = match episode.number {
                    Some(number) => format!("season {}, number {}", episode.season, number),
                    None => format!("season {}, special", episode.season),
                };
                let _ = write!(
                    out,
                    "  {}-{} \"{}\" ({})",
                    show_id,
                    episode.id,
                    display_name(episode.name.as_deref()),
                    position
                );
                if let Some(url) = &episode.url {
                    let _ = write!(out, " {}", url);
                }
                out.push('\n');
            }
            out.push_str(&episode_counter(episodes.len()));
            out.push('\n');
        }
        Err(envelope) => {
            let _ = writeln!(out, "  {}-{} {}", show_id, envelope.id(), envelope.description);
        }
    }

    out
}

/// "1 episode" or "{n} episodes".
pub fn episode_counter(count: usize) -> String {
    if count == 1 {
        "1 episode".to_string()
    } else {
        format!("{} episodes", count)
    }
}

fn render_error_card(out: &mut String, envelope: &ErrorEnvelope) {
    let _ = writeln!(out, "{}", envelope.headline);
    let _ = writeln!(out, "  {}", envelope.description);
    if !envelope.image.is_empty() {
        let _ = writeln!(out, "  Image: {}", envelope.image);
    }
}

/// Name to show for a record; TVmaze leaves some titles null.
fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("Unknown")
}

/// Converts an HTML summary to plain text, `None` if nothing is left.
fn summary_text(summary: Option<&str>) -> Option<String> {
    let text = nanohtml2text::html2text(summary?).trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}
