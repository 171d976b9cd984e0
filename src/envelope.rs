//! Error envelopes
//!
//! An envelope is the value returned in place of a result list whenever a
//! query produced nothing usable. It carries everything the presentation
//! layer needs to show a single error entry, so callers never deal with a
//! separate error path.

use serde::Serialize;
use std::fmt;

/// Marker shown wherever an envelope takes the place of a record id.
pub const ERROR_ID: &str = "ERROR";

/// Why a query produced an envelope instead of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "error", content = "status", rename_all = "snake_case")]
pub enum ErrorKind {
    /// TVmaze answered 200 with an empty list
    NothingFound,
    /// TVmaze answered with a status other than 200
    NonSuccessStatus(u16),
    /// The request failed or the response body could not be decoded
    TransportFault,
    /// Every raw entry was malformed, so normalization produced nothing
    NormalizationAnomaly,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NothingFound => write!(f, "nothing found"),
            ErrorKind::NonSuccessStatus(status) => write!(f, "non-success status {}", status),
            ErrorKind::TransportFault => write!(f, "transport fault"),
            ErrorKind::NormalizationAnomaly => write!(f, "normalization anomaly"),
        }
    }
}

/// A single error entry standing in for a whole result list.
///
/// Serializes with an `"id": "ERROR"` marker and the kind flattened next to
/// the texts, so JSON consumers can tell it apart from a record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "SerializedEnvelope")]
pub struct ErrorEnvelope {
    /// What went wrong
    pub kind: ErrorKind,
    /// Short, cheeky headline (blank for episode listings)
    pub headline: String,
    /// Detailed, user-facing description
    pub description: String,
    /// Image shown next to the error (blank for episode listings)
    pub image: String,
}

impl ErrorEnvelope {
    /// Legacy id marker, kept for display, log lines and JSON output.
    pub fn id(&self) -> &'static str {
        ERROR_ID
    }
}

/// Wire shape of an envelope.
#[derive(Serialize)]
struct SerializedEnvelope {
    id: &'static str,
    #[serde(flatten)]
    kind: ErrorKind,
    headline: String,
    description: String,
    image: String,
}

impl From<ErrorEnvelope> for SerializedEnvelope {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self {
            id: envelope.id(),
            kind: envelope.kind,
            headline: envelope.headline,
            description: envelope.description,
            image: envelope.image,
        }
    }
}

/// Builds an error envelope.
///
/// Pure and total: any combination of texts yields a valid envelope.
pub fn build_error(
    kind: ErrorKind,
    headline: impl Into<String>,
    description: impl Into<String>,
    image: impl Into<String>,
) -> ErrorEnvelope {
    ErrorEnvelope {
        kind,
        headline: headline.into(),
        description: description.into(),
        image: image.into(),
    }
}

/// One prepared error message: the texts a call site wants shown for a
/// particular failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub headline: String,
    pub description: String,
    pub image: String,
}

impl ErrorMessage {
    pub fn new(
        headline: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            headline: headline.into(),
            description: description.into(),
            image: image.into(),
        }
    }

    /// Turns this message into an envelope, replacing the description with
    /// the fully assembled text.
    pub fn to_envelope(&self, kind: ErrorKind, description: impl Into<String>) -> ErrorEnvelope {
        build_error(kind, self.headline.as_str(), description, self.image.as_str())
    }
}

/// The message set injected into a fetch, one entry per failure class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages {
    /// Used when TVmaze returns an empty list
    pub not_found: ErrorMessage,
    /// Used when TVmaze returns a status other than 200
    pub not_ok: ErrorMessage,
    /// Used when the request itself fails
    pub unexpected: ErrorMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_keeps_texts() {
        let envelope = build_error(ErrorKind::NothingFound, "Oh SNAP!", "Nothing here.", "x.png");

        assert_eq!(envelope.kind, ErrorKind::NothingFound);
        assert_eq!(envelope.headline, "Oh SNAP!");
        assert_eq!(envelope.description, "Nothing here.");
        assert_eq!(envelope.image, "x.png");
        assert_eq!(envelope.id(), "ERROR");
    }

    #[test]
    fn test_to_envelope_replaces_description() {
        let message = ErrorMessage::new("Headline", "template", "img.jpg");
        let envelope = message.to_envelope(ErrorKind::NonSuccessStatus(500), "assembled");

        assert_eq!(envelope.headline, "Headline");
        assert_eq!(envelope.description, "assembled");
        assert_eq!(envelope.image, "img.jpg");
        assert_eq!(envelope.kind, ErrorKind::NonSuccessStatus(500));
    }

    #[test]
    fn test_error_kind_serializes_with_status() {
        let json = serde_json::to_value(ErrorKind::NonSuccessStatus(503)).unwrap();
        assert_eq!(json, serde_json::json!({"error": "non_success_status", "status": 503}));

        let json = serde_json::to_value(ErrorKind::NothingFound).unwrap();
        assert_eq!(json, serde_json::json!({"error": "nothing_found"}));
    }

    #[test]
    fn test_envelope_serializes_flat_with_id() {
        let envelope = build_error(ErrorKind::NothingFound, "Oh SNAP!", "Nothing.", "x.png");

        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "ERROR",
                "error": "nothing_found",
                "headline": "Oh SNAP!",
                "description": "Nothing.",
                "image": "x.png"
            })
        );

        let json = serde_json::to_value(build_error(ErrorKind::NonSuccessStatus(503), "", "Down.", ""))
            .unwrap();
        assert_eq!(json["id"], "ERROR");
        assert_eq!(json["error"], "non_success_status");
        assert_eq!(json["status"], 503);
    }
}
