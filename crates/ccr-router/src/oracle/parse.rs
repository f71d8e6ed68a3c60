//! Reading a plausibility out of a free-text model reply.

use std::sync::LazyLock;

use ccr_core::errors::OracleError;
use regex::Regex;

static NUMBER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[-+]?(?:\d*\.\d+|\d+)").ok());

/// Longest reply excerpt kept in a `MalformedOutput` error.
const MAX_RAW_EXCERPT: usize = 80;

/// Parse the first number in `text` as a plausibility in [0, 1].
///
/// Values above 10 are read as percentages, values in (1, 10] as tenths.
/// The result is clamped into [0, 1].
pub fn parse_score(text: &str) -> Result<f64, OracleError> {
    let malformed = || OracleError::MalformedOutput {
        raw: text.chars().take(MAX_RAW_EXCERPT).collect(),
    };

    let re = NUMBER_RE.as_ref().ok_or_else(malformed)?;
    let value: f64 = re
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(malformed)?;

    let scaled = if value > 10.0 {
        value / 100.0
    } else if value > 1.0 {
        value / 10.0
    } else {
        value
    };
    Ok(scaled.clamp(0.0, 1.0))
}
