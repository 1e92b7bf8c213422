//! Regular-expression predicates
//!
//! A missing (`None`) subject string reports false rather than failing; the
//! pattern itself is always present by construction, so the original
//! null-pattern failure mode has no Rust counterpart.

use regex::Regex;

use super::combinators::Predicate;

/// Predicate that checks a string against a regular expression.
#[derive(Clone, Debug)]
pub struct Matches(pub Regex);

macro_rules! impl_matches {
    ($($ty:ty => |$this:ident, $v:ident| $body:expr),+ $(,)?) => {
        $(impl Predicate<$ty> for Matches {
            #[inline]
            fn test(&self, $v: &$ty) -> bool {
                let $this = self;
                $body
            }

            fn phrase(&self) -> String {
                format!("match {}", self.0)
            }
        })+
    };
}

impl_matches! {
    str => |this, value| this.0.is_match(value),
    String => |this, value| this.0.is_match(value),
    &str => |this, value| this.0.is_match(value),
    // A missing subject does not match anything.
    Option<String> => |this, value| value.as_ref().is_some_and(|v| this.0.is_match(v)),
    Option<&str> => |this, value| value.is_some_and(|v| this.0.is_match(v)),
}

/// Create a predicate that checks a string against `regex`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
/// use regex::Regex;
///
/// let hex = matches(Regex::new("^[0-9a-f]+$").unwrap());
/// assert!(hex.test("deadbeef"));
/// assert!(!hex.test("xyz"));
/// assert!(!hex.test(&None::<&str>));
/// ```
pub fn matches(regex: Regex) -> Matches {
    Matches(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let p = matches(Regex::new("^a+$").unwrap());
        assert!(p.test("aaa"));
        assert!(!p.test("aab"));
        assert!(!p.test(""));
    }

    #[test]
    fn test_none_subject_reports_false() {
        let p = matches(Regex::new(".*").unwrap());
        assert!(!p.test(&None::<String>));
        assert!(p.test(&Some("anything".to_string())));
    }

    #[test]
    fn test_phrase_embeds_pattern() {
        let p = matches(Regex::new("^a+$").unwrap());
        assert_eq!(Predicate::<str>::phrase(&p), "match ^a+$");
    }
}
