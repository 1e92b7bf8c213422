//! Message formatting helpers
//!
//! Guard messages embed the offending values. Sequences are rendered as
//! `[a, b, c]`, truncated to the first ten elements with a trailing `...`
//! marker so messages stay readable for large inputs.

use std::fmt;

/// Maximum number of sequence elements rendered in a message.
const MAX_ELEMENTS: usize = 10;

/// Format a sequence for embedding in a guard message.
///
/// More than [`MAX_ELEMENTS`] elements truncate with a `...` marker:
/// `[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ...]`.
pub(crate) fn format_sequence<T: fmt::Display>(items: &[T]) -> String {
    let mut parts: Vec<String> = items
        .iter()
        .take(MAX_ELEMENTS)
        .map(ToString::to_string)
        .collect();

    if items.len() > MAX_ELEMENTS {
        parts.push(String::from("..."));
    }

    format!("[{}]", parts.join(", "))
}

/// Format a sequence of optional values, rendering `None` as `null`.
pub(crate) fn format_nullable_sequence<T: fmt::Display>(items: &[Option<T>]) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| match item {
            Some(value) => value.to_string(),
            None => String::from("null"),
        })
        .collect();

    format_sequence(&rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sequence() {
        assert_eq!(format_sequence(&[1, 2, 3]), "[1, 2, 3]");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(format_sequence::<i32>(&[]), "[]");
    }

    #[test]
    fn test_exactly_ten_elements() {
        let items: Vec<i32> = (1..=10).collect();
        assert_eq!(format_sequence(&items), "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]");
    }

    #[test]
    fn test_truncation_past_ten_elements() {
        let items: Vec<i32> = (1..=11).collect();
        assert_eq!(
            format_sequence(&items),
            "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ...]"
        );
    }

    #[test]
    fn test_nullable_sequence() {
        assert_eq!(
            format_nullable_sequence(&[Some(1), None, Some(3)]),
            "[1, null, 3]"
        );
    }
}
