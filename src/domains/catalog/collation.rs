//! Locale-aware name ordering.
//!
//! Names are compared on a primary key built by decomposing to NFD, dropping
//! combining marks and folding case, so "Éclair" sorts next to "eclair" and
//! "apple" sorts before "Banana". Names with equal primary keys are ordered
//! unaccented before accented, then lowercase before uppercase, and finally
//! by their raw text to keep the order total.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary collation key for `s`.
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two names the way a reader expects them alphabetised.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| a.nfd().map(char::is_uppercase).cmp(b.nfd().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

/// Case-folded NFD text with combining marks kept.
fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}
