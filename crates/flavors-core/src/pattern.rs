//! The flavor-text lexical pattern

use once_cell::sync::Lazy;
use regex::Regex;

// One uppercase letter, zero or more lowercase letters, an "ing" suffix,
// immediately followed by three periods or a horizontal ellipsis. The capture
// group holds the letters only.
static FLAVOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]*ing)(?:\.\.\.|…)").expect("flavor pattern must compile")
});

/// The shared, precompiled flavor-text pattern.
///
/// Compiled once on first use and treated as read-only afterwards.
pub fn flavor_pattern() -> &'static Regex {
    &FLAVOR_PATTERN
}
