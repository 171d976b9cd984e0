//! Remote fetch adapter
//!
//! The single choke point every TVmaze request goes through. It performs the
//! GET, classifies the outcome, and either hands the decoded payload to the
//! supplied normalizer or returns an envelope built from the injected
//! message set.

use super::{Outcome, Transport};
use crate::envelope::{ErrorEnvelope, ErrorKind, ErrorMessages};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// The only status TVmaze success is accepted with.
const STATUS_OK: u16 = 200;

/// Fetches `endpoint` and normalizes the response.
///
/// Searching shows and listing episodes only differ in the endpoint, the
/// message set, and the normalizer, so both go through this function.
///
/// # Arguments
///
/// * `transport` - Performs the actual HTTP GET
/// * `endpoint` - Fully built request URL
/// * `messages` - Texts for the not-found, not-ok and unexpected cases
/// * `normalize` - Converts the decoded, non-empty payload into records
/// * `context` - Query text or show name, passed on to `normalize`
///
/// # Returns
///
/// Whatever `normalize` returns, or a single envelope when the request
/// failed, the status was not 200, or the payload was empty. This function
/// never panics and never returns a bare transport error.
pub fn fetch_and_normalize<R, T, N>(
    transport: &impl Transport,
    endpoint: &str,
    messages: &ErrorMessages,
    normalize: N,
    context: &str,
) -> Outcome<T>
where
    R: DeserializeOwned,
    N: FnOnce(Vec<R>, &str) -> Outcome<T>,
{
    debug!(endpoint, "requesting TVmaze");

    let response = match transport.get(endpoint) {
        Ok(response) => response,
        Err(e) => return Err(unexpected(messages, endpoint, &e.to_string())),
    };

    if response.status != STATUS_OK {
        let kind = ErrorKind::NonSuccessStatus(response.status);
        warn!(endpoint, %kind, "TVmaze request was not successful");
        return Err(messages.not_ok.to_envelope(
            kind,
            format!(
                "{}TVmaze response code = {}.",
                messages.not_ok.description, response.status
            ),
        ));
    }

    let payload: Vec<R> = match serde_json::from_str(&response.body) {
        Ok(payload) => payload,
        Err(e) => return Err(unexpected(messages, endpoint, &e.to_string())),
    };

    if payload.is_empty() {
        warn!(endpoint, kind = %ErrorKind::NothingFound, "TVmaze returned no entries");
        return Err(messages.not_found.to_envelope(
            ErrorKind::NothingFound,
            format!(
                "{}TVmaze response code = {}.",
                messages.not_found.description, response.status
            ),
        ));
    }

    debug!(endpoint, entries = payload.len(), "normalizing TVmaze response");
    normalize(payload, context)
}

/// Builds the envelope for a failed request or an undecodable body.
fn unexpected(messages: &ErrorMessages, endpoint: &str, fault: &str) -> ErrorEnvelope {
    let kind = ErrorKind::TransportFault;
    warn!(endpoint, %kind, fault, "TVmaze request failed");
    messages.unexpected.to_envelope(
        kind,
        format!(
            "An unexpected error ({}) occurred while connecting to TVmaze. {}",
            fault, messages.unexpected.description
        ),
    )
}
