//! Threshold arithmetic for versus rolls.
//!
//! Versus tokens carry a parenthesized expression such as `20+30-10`.
//! Only signed-integer chains joined by `+` and `-` are accepted; anything
//! else is rejected before evaluation, never interpreted.

use std::sync::LazyLock;

use regex::Regex;

static CHAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d{1,4}([+-]\d{1,4})*$").expect("grammar pattern compiles"));

static TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?\d+").expect("grammar pattern compiles"));

/// Validate and evaluate a signed-integer chain.
///
/// Returns `None` when the expression does not match the strict grammar
/// (terms are limited to four digits each).
pub fn evaluate(expr: &str) -> Option<i64> {
    if !CHAIN.is_match(expr) {
        return None;
    }
    Some(
        TERM.find_iter(expr)
            .filter_map(|term| term.as_str().parse::<i64>().ok())
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_term() {
        assert_eq!(evaluate("45"), Some(45));
    }

    #[test]
    fn chained_terms() {
        assert_eq!(evaluate("20+30-10"), Some(40));
    }

    #[test]
    fn leading_sign() {
        assert_eq!(evaluate("-10+30"), Some(20));
        assert_eq!(evaluate("+15"), Some(15));
    }

    #[test]
    fn rejects_other_operators() {
        assert_eq!(evaluate("2*3"), None);
        assert_eq!(evaluate("20/4"), None);
        assert_eq!(evaluate("(20)"), None);
    }

    #[test]
    fn rejects_dangling_signs() {
        assert_eq!(evaluate("20+"), None);
        assert_eq!(evaluate("20+-30"), None);
        assert_eq!(evaluate("+"), None);
    }

    #[test]
    fn rejects_terms_over_four_digits() {
        assert_eq!(evaluate("12345"), None);
        assert_eq!(evaluate("20+99999"), None);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(evaluate(""), None);
    }
}
