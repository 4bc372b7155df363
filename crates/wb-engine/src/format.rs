//! Rendering helpers shared by the evaluators.

use std::fmt::Display;

/// Format a modifier with an explicit sign; zero formats as nothing, so
/// `2d6` stays `[2d6]` rather than `[2d6+0]`.
pub fn format_mod(modifier: i32) -> String {
    if modifier == 0 {
        String::new()
    } else {
        format!("{modifier:+}")
    }
}

/// Join display values with `", "`.
pub fn join_comma<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A counted noun: `1 hit`, `3 hits`.
pub fn count_noun(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_signs() {
        assert_eq!(format_mod(3), "+3");
        assert_eq!(format_mod(-2), "-2");
        assert_eq!(format_mod(0), "");
    }

    #[test]
    fn comma_join() {
        assert_eq!(join_comma(&[12, 7, 9]), "12, 7, 9");
        assert_eq!(join_comma::<i64>(&[]), "");
    }

    #[test]
    fn counted_nouns() {
        assert_eq!(count_noun(1, "hit", "hits"), "1 hit");
        assert_eq!(count_noun(2, "hit", "hits"), "2 hits");
        assert_eq!(count_noun(0, "raise", "raises"), "0 raises");
    }
}
