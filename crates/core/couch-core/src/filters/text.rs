use super::{integer_arg, is_empty, Filter};
use serde_json::Value;

pub const ELLIPSIS: &str = "...";

/// First `max` characters of `value` followed by `...`.
///
/// The suffix is appended even when nothing was cut. A negative `max`
/// counts from the end of the string.
pub fn shorten(value: Option<&str>, max: i64) -> Option<String> {
    let value = value.filter(|v| !is_empty(v))?;
    let len = value.chars().count() as i64;
    let end = if max < 0 {
        (len + max).max(0)
    } else {
        max.min(len)
    };
    let mut out: String = value.chars().take(end as usize).collect();
    out.push_str(ELLIPSIS);
    Some(out)
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !is_empty(v))?;
    let mut chars = value.chars();
    let first = chars.next()?;
    let mut out: String = first.to_uppercase().collect();
    out.push_str(chars.as_str());
    Some(out)
}

#[derive(Debug)]
pub struct ShortenFilter {
    pub default_max: i64,
}

impl Filter for ShortenFilter {
    fn name(&self) -> &str {
        "shorten"
    }

    fn description(&self) -> &str {
        "Keep the first N characters (default from settings) and append an ellipsis"
    }

    fn apply(&self, value: Option<&str>, args: &[Value]) -> Option<String> {
        let max = args.first().map_or(self.default_max, integer_arg);
        shorten(value, max)
    }
}

#[derive(Debug)]
pub struct CapitalizeFilter;

impl Filter for CapitalizeFilter {
    fn name(&self) -> &str {
        "capitalize"
    }

    fn description(&self) -> &str {
        "Uppercase the first character"
    }

    fn apply(&self, value: Option<&str>, _args: &[Value]) -> Option<String> {
        capitalize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shorten_truncates_and_appends() {
        assert_eq!(shorten(Some("hello"), 3).as_deref(), Some("hel..."));
        assert_eq!(shorten(Some("couchsport spot"), 10).as_deref(), Some("couchsport..."));
    }

    #[test]
    fn shorten_appends_even_without_truncation() {
        assert_eq!(shorten(Some("hi"), 10).as_deref(), Some("hi..."));
    }

    #[test]
    fn shorten_negative_counts_from_end() {
        assert_eq!(shorten(Some("couchsport"), -3).as_deref(), Some("couchsp..."));
        assert_eq!(shorten(Some("abc"), -10).as_deref(), Some("..."));
    }

    #[test]
    fn shorten_counts_characters_not_bytes() {
        assert_eq!(shorten(Some("équitation"), 2).as_deref(), Some("éq..."));
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize(Some("couchsport")).as_deref(), Some("Couchsport"));
        assert_eq!(capitalize(Some("a")).as_deref(), Some("A"));
        assert_eq!(capitalize(Some("ski de fond")).as_deref(), Some("Ski de fond"));
        assert_eq!(capitalize(Some("équitation")).as_deref(), Some("Équitation"));
        assert_eq!(capitalize(Some("1st")).as_deref(), Some("1st"));
    }

    #[test]
    fn empty_input_produces_nothing() {
        assert_eq!(shorten(None, 10), None);
        assert_eq!(shorten(Some(""), 10), None);
        assert_eq!(capitalize(None), None);
        assert_eq!(capitalize(Some("")), None);
    }

    #[test]
    fn shorten_filter_argument_handling() {
        let filter = ShortenFilter { default_max: 10 };
        assert_eq!(filter.apply(Some("hello world!"), &[]).as_deref(), Some("hello worl..."));
        assert_eq!(filter.apply(Some("hello"), &[json!(2)]).as_deref(), Some("he..."));
        assert_eq!(filter.apply(Some("hello"), &[json!("3")]).as_deref(), Some("hel..."));
        // null and non-numeric arguments slice nothing
        assert_eq!(filter.apply(Some("hello"), &[json!(null)]).as_deref(), Some("..."));
        assert_eq!(filter.apply(Some("hello"), &[json!("lots")]).as_deref(), Some("..."));
    }
}
