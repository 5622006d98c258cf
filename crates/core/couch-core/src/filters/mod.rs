//! Display filters: named, stateless text transforms that views pipe raw
//! field values through.

pub mod chain;
pub mod date;
pub mod text;

pub use chain::{parse_chain, FilterCall};
pub use date::{format_date, FormatDateFilter};
pub use text::{capitalize, shorten, CapitalizeFilter, ShortenFilter};

use crate::config::{DEFAULT_DATE_FORMAT, DEFAULT_SHORTEN_MAX};
use crate::error::{AppError, AppResult};
use serde_json::Value;

/// Trait for all display filters
pub trait Filter: std::fmt::Debug + Send + Sync {
    /// Name templates refer to (e.g. "shorten")
    fn name(&self) -> &str;

    /// Short description of the filter
    fn description(&self) -> &str;

    /// Transform `value`. `None` in, or an empty value, means nothing to show.
    fn apply(&self, value: Option<&str>, args: &[Value]) -> Option<String>;
}

/// Defaults handed to the filters at install time.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub date_format: String,
    pub shorten_max: i64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            shorten_max: DEFAULT_SHORTEN_MAX,
        }
    }
}

/// The application's built-in filters.
pub fn get_all(options: &FilterOptions) -> Vec<Box<dyn Filter>> {
    vec![
        Box::new(FormatDateFilter {
            default_format: options.date_format.clone(),
        }),
        Box::new(ShortenFilter {
            default_max: options.shorten_max,
        }),
        Box::new(CapitalizeFilter),
    ]
}

/// Bootstrap hook registering the built-in filters into a registry.
pub struct AppFilters;

impl AppFilters {
    pub fn install(registry: &mut FilterRegistry, options: &FilterOptions) -> AppResult<()> {
        for filter in get_all(options) {
            registry.register(filter)?;
        }
        log::debug!("Installed filters: {}", registry.names().join(", "));
        Ok(())
    }
}

/// Named filters available to a view. Built once, read-only afterwards.
#[derive(Debug, Default)]
pub struct FilterRegistry {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in filters.
    pub fn with_defaults(options: &FilterOptions) -> AppResult<Self> {
        let mut registry = Self::new();
        AppFilters::install(&mut registry, options)?;
        Ok(registry)
    }

    pub fn register(&mut self, filter: Box<dyn Filter>) -> AppResult<()> {
        if self.get(filter.name()).is_some() {
            return Err(AppError::DuplicateFilter(filter.name().to_string()));
        }
        self.filters.push(filter);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Filter> {
        self.filters
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
    }

    /// Filter names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Filter> {
        self.filters.iter().map(|f| f.as_ref())
    }

    pub fn apply(&self, name: &str, value: Option<&str>, args: &[Value]) -> AppResult<Option<String>> {
        let filter = self
            .get(name)
            .ok_or_else(|| AppError::UnknownFilter(name.to_string()))?;
        Ok(filter.apply(value, args))
    }

    /// Runs `value` through every step of `chain`, left to right.
    pub fn apply_chain(&self, value: Option<&str>, chain: &str) -> AppResult<Option<String>> {
        self.apply_calls(value, &parse_chain(chain)?)
    }

    pub fn apply_calls(&self, value: Option<&str>, calls: &[FilterCall]) -> AppResult<Option<String>> {
        let mut current = value.map(str::to_string);
        for call in calls {
            current = self.apply(&call.name, current.as_deref(), &call.args)?;
        }
        Ok(current)
    }
}

pub(crate) fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Stringifies template data the way the view layer sees it.
///
/// `null`, `false`, `0` and `""` are falsy and give `None`. Numbers print
/// without a trailing `.0`, arrays join their items with `,` and objects
/// become `[object Object]`.
pub fn coerce_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null | Value::Bool(false) => return None,
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        _ => stringify(value),
    };
    (!is_empty(&text)).then_some(text)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integer conversion for numeric filter arguments; anything that is not a
/// number reads as `0`.
pub(crate) fn integer_arg(value: &Value) -> i64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    // Float to int casts saturate
    number.trunc() as i64
}
