//! The staleness decision between a client version and the stored reference

use crate::gate::tuple::VersionTuple;

/// Result of comparing a client version against the reference version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOutcome {
    /// Client is up to date
    Current,
    /// An upgrade is available
    Stale,
}

/// Decide whether a client-reported version is behind the reference version.
///
/// Both inputs are raw strings; the client side is shape-validated and the
/// reference side character-sanitized before parsing (see
/// [`crate::gate::tuple`]). Never fails: every input pair produces an outcome.
///
/// The scan walks `[major, minor, patch, build]` in order and returns
/// [`ComparisonOutcome::Stale`] at the first index where the client component
/// is strictly below the reference component; an index where the client is
/// ahead is skipped rather than ending the scan. A client that is ahead on an
/// earlier component but behind on a later one is therefore still reported
/// stale (`2.0.0.0` against `1.9.0.0`, for example). This is deliberately
/// bug-compatible with the deployed checker; see DESIGN.md before changing it.
pub fn evaluate(client_raw: &str, reference_raw: &str) -> ComparisonOutcome {
    let client = VersionTuple::from_client(client_raw);
    let reference = VersionTuple::from_reference(reference_raw);
    compare(client, reference)
}

fn compare(client: VersionTuple, reference: VersionTuple) -> ComparisonOutcome {
    let client = client.components();
    let reference = reference.components();

    for i in 0..4 {
        if client[i] < reference[i] {
            return ComparisonOutcome::Stale;
        }
    }

    ComparisonOutcome::Current
}
