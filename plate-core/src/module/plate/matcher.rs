///! Search keyword matching and simple plate predicates

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Minimum run of digits for a plate to count as numeric only
const NUMERIC_RUN: usize = 5;

/// Compiled search keyword
///
/// Every character outside `[0-9a-zA-Z]` is a wildcard for exactly one
/// character, so `AF33*33` matches `AF33033` through `AF33933`. Matching is
/// case-insensitive and may hit anywhere in the plate.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    regex: Option<Regex>,
}

impl KeywordMatcher {
    pub fn new(keyword: &str) -> Self {
        let pattern: String = keyword
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '.' })
            .collect();

        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("Failed to compile search keyword '{}': {}", keyword, e);
                None
            }
        };

        Self { regex }
    }

    pub fn is_match(&self, plate: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(plate))
    }
}

/// Match a single plate against a search keyword
pub fn matches_keyword(plate: &str, keyword: &str) -> bool {
    KeywordMatcher::new(keyword).is_match(plate)
}

/// 仅数字: five or more digits in a row
pub fn is_numeric_only(plate: &str) -> bool {
    plate
        .split(|c: char| !c.is_ascii_digit())
        .any(|field| field.len() >= NUMERIC_RUN)
}

/// Whether the plate contains the digit 4 anywhere
pub fn contains_digit_four(plate: &str) -> bool {
    plate.contains('4')
}
