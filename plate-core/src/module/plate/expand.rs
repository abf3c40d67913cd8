///! Range expansion
///!
///! Turns `A100BC ~ A103BC` into `[A100BC, A101BC, A102BC, A103BC]`.

use plate_common::PlateRange;
use tracing::debug;

use crate::error::{ExpandError, ExpandResult};

/// Upper bound on the number of plates a single range may expand to
pub const MAX_RANGE_SIZE: u64 = 1_000_000;

/// Number of suffixes enumerated by the single-prefix form
const PREFIX_SPAN: u64 = 100;

/// Expand a range into the ordered list of plates it covers.
///
/// # Two-boundary form
/// The boundaries are split into a common head, a varying numeric run and a
/// common tail. The run spans from the first to the last differing position,
/// so equal characters in between still belong to it. Its length is the
/// zero-padding width of every generated plate.
///
/// # Single-prefix form
/// Everything but the last two characters is kept, the suffix runs `00..99`.
///
/// # Errors
/// Returns [`ExpandError`] for unequal lengths, a non-numeric run, an end
/// before the start, or a range wider than [`MAX_RANGE_SIZE`]. Nothing is
/// emitted on failure.
pub fn expand(range: &PlateRange) -> ExpandResult<Vec<String>> {
    let plates = match range {
        PlateRange::Bounded { start, end } => expand_bounded(start, end)?,
        PlateRange::Prefix { start } => expand_prefix(start)?,
    };

    debug!("Expanded {} into {} plates", range, plates.len());
    Ok(plates)
}

fn expand_bounded(start: &str, end: &str) -> ExpandResult<Vec<String>> {
    let from: Vec<char> = start.chars().collect();
    let to: Vec<char> = end.chars().collect();

    if from.len() != to.len() {
        return Err(ExpandError::LengthMismatch {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let differs = |i: &usize| from[*i] != to[*i];
    let Some(first) = (0..from.len()).find(differs) else {
        // Identical boundaries denote exactly one plate
        return Ok(vec![start.to_string()]);
    };
    let last = (first..from.len()).rev().find(differs).unwrap_or(first);

    let head: String = from[..first].iter().collect();
    let tail: String = from[last + 1..].iter().collect();
    let width = last - first + 1;

    let too_wide = || ExpandError::TooWide {
        start: start.to_string(),
        end: end.to_string(),
        limit: MAX_RANGE_SIZE,
    };

    let low = parse_run(start, &from[first..=last]).ok_or_else(too_wide)??;
    let high = parse_run(end, &to[first..=last]).ok_or_else(too_wide)??;

    if high < low {
        return Err(ExpandError::Descending {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    if high - low >= MAX_RANGE_SIZE {
        return Err(too_wide());
    }

    Ok((low..=high)
        .map(|n| format!("{head}{n:0width$}{tail}"))
        .collect())
}

fn expand_prefix(start: &str) -> ExpandResult<Vec<String>> {
    let chars: Vec<char> = start.chars().collect();
    if chars.len() < 2 {
        return Err(ExpandError::TooShort {
            start: start.to_string(),
        });
    }

    let split = chars.len() - 2;
    if !chars[split..].iter().all(|c| c.is_ascii_digit()) {
        return Err(ExpandError::NonDigit {
            boundary: start.to_string(),
            segment: chars[split..].iter().collect(),
        });
    }

    let prefix: String = chars[..split].iter().collect();
    Ok((0..PREFIX_SPAN).map(|n| format!("{prefix}{n:02}")).collect())
}

/// Parse the varying run of a boundary.
///
/// Returns `None` when the run is numeric but too long for a `u64`.
fn parse_run(boundary: &str, run: &[char]) -> Option<ExpandResult<u64>> {
    if !run.iter().all(|c| c.is_ascii_digit()) {
        return Some(Err(ExpandError::NonDigit {
            boundary: boundary.to_string(),
            segment: run.iter().collect(),
        }));
    }

    run.iter().collect::<String>().parse::<u64>().ok().map(Ok)
}

/// Recover the two-boundary range from an expansion result
pub fn bounds_of(plates: &[String]) -> Option<PlateRange> {
    let first = plates.first()?;
    let last = plates.last()?;
    Some(PlateRange::bounded(first.clone(), last.clone()))
}
