//! UI text localization.
//!
//! Catalogs are nested maps from dotted keys to template strings. The
//! [`Translator`] resolves a key against the active locale, falls back to a
//! second locale, and substitutes `{0}` / `{name}` placeholders.

pub mod catalog;
pub mod en;
pub mod translator;

pub use catalog::{Message, MessageCatalog};
pub use translator::Translator;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Static catalog node used to write built-in catalogs as literals.
#[derive(Debug, Clone, Copy)]
pub enum Entry {
    Text(&'static str),
    Group(&'static [(&'static str, Entry)]),
}

static EN: LazyLock<MessageCatalog> = LazyLock::new(en::catalog);

/// Catalog compiled into the binary for `locale`, if any.
pub fn builtin(locale: &Locale) -> Option<&'static MessageCatalog> {
    match locale.as_str() {
        "en" => Some(&*EN),
        _ => None,
    }
}

pub fn builtin_locales() -> &'static [&'static str] {
    &["en"]
}

/// Normalized language tag: `en_US.UTF-8`, `en-GB` and `EN` all become `en`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    pub const ENV_LANG: &'static str = "COUCHSPORT_LANG";

    pub fn new(tag: &str) -> Self {
        let code = tag
            .split('.')
            .next()
            .unwrap_or_default()
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        match code.as_str() {
            "" | "c" | "posix" => Self::default(),
            _ => Self(code),
        }
    }

    /// Reads `COUCHSPORT_LANG`, then `LANG`, defaulting to `en`.
    pub fn from_env() -> Self {
        [Self::ENV_LANG, "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::new(&value))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Substitution arguments: positional values for `{0}`, `{1}`... and named
/// values for tokens such as `{len}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        Self {
            positional: values.into_iter().map(|v| v.to_string()).collect(),
            named: BTreeMap::new(),
        }
    }

    pub fn arg(mut self, value: impl fmt::Display) -> Self {
        self.positional.push(value.to_string());
        self
    }

    pub fn named(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.named.insert(name.into(), value.to_string());
        self
    }

    pub fn push(&mut self, value: impl fmt::Display) {
        self.positional.push(value.to_string());
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.named.insert(name.into(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    fn resolve(&self, token: &str) -> Option<&str> {
        if token.is_empty() {
            return None;
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            let index: usize = token.parse().ok()?;
            return self.positional.get(index).map(String::as_str);
        }
        self.named.get(token).map(String::as_str)
    }
}

/// Replaces placeholder tokens in `template`.
///
/// Tokens without a matching argument are kept verbatim. Substituted values
/// are never scanned again.
pub fn interpolate(template: &str, args: &Args) -> String {
    if args.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let token = &after[..close];
        if token.contains('{') {
            // Stray brace: emit it and rescan from the inner one
            out.push('{');
            rest = after;
            continue;
        }
        match args.resolve(token.trim()) {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(token);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_normalization() {
        assert_eq!(Locale::new("en_US.UTF-8").as_str(), "en");
        assert_eq!(Locale::new("fr-FR").as_str(), "fr");
        assert_eq!(Locale::new("IT").as_str(), "it");
        assert_eq!(Locale::new("C").as_str(), "en");
        assert_eq!(Locale::new("").as_str(), "en");
    }

    #[test]
    fn positional_substitution() {
        let args = Args::list(["page", "public"]);
        assert_eq!(interpolate("your {0} is now {1}", &args), "your page is now public");
    }

    #[test]
    fn named_substitution() {
        let args = Args::new().named("len", 8);
        assert_eq!(
            interpolate("password must contains {len} characters", &args),
            "password must contains 8 characters"
        );
    }

    #[test]
    fn missing_args_left_intact() {
        let args = Args::new().arg("name");
        assert_eq!(
            interpolate("the {0} length must be below {1}", &args),
            "the name length must be below {1}"
        );
        assert_eq!(interpolate("{} and {len}", &args), "{} and {len}");
    }

    #[test]
    fn no_recursive_substitution() {
        let args = Args::list(["{1}", "x"]);
        assert_eq!(interpolate("{0}", &args), "{1}");
    }

    #[test]
    fn unbalanced_braces() {
        let args = Args::new().arg("a");
        assert_eq!(interpolate("open { {0}", &args), "open { a");
        assert_eq!(interpolate("tail {0", &args), "tail {0");
    }

    #[test]
    fn empty_args_is_identity() {
        assert_eq!(interpolate("{0} is required", &Args::new()), "{0} is required");
    }

    #[test]
    fn builtin_lookup() {
        assert!(builtin(&Locale::new("en")).is_some());
        assert!(builtin(&Locale::new("fr")).is_none());
    }
}
