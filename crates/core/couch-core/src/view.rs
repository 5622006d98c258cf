//! Rendering context handed to views.
//!
//! Views receive the filter registry and the translator explicitly instead
//! of reaching for process-wide state. Templates use the same syntax as the
//! front-end: `{{ page.name | shorten(20) | capitalize }}` or
//! `{{ $t('message.auth.required', 'email') }}`.

use crate::error::{AppError, AppResult};
use crate::filters::chain::{parse_args, parse_call, parse_literal, split_top_level};
use crate::filters::{coerce_value, FilterRegistry};
use crate::i18n::{Args, Translator};
use serde_json::Value;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    filters: &'a FilterRegistry,
    translator: &'a Translator,
}

impl<'a> ViewContext<'a> {
    pub fn new(filters: &'a FilterRegistry, translator: &'a Translator) -> Self {
        Self {
            filters,
            translator,
        }
    }

    pub fn filters(&self) -> &'a FilterRegistry {
        self.filters
    }

    pub fn translator(&self) -> &'a Translator {
        self.translator
    }

    pub fn filter(&self, name: &str, value: Option<&str>, args: &[Value]) -> AppResult<Option<String>> {
        self.filters.apply(name, value, args)
    }

    pub fn pipe(&self, value: Option<&str>, chain: &str) -> AppResult<Option<String>> {
        self.filters.apply_chain(value, chain)
    }

    pub fn t(&self, key: &str, args: &Args) -> String {
        self.translator.t(key, args)
    }

    /// Evaluates one interpolation body: a head expression followed by
    /// optional `| filter` steps.
    pub fn evaluate(&self, expr: &str, data: &Value) -> AppResult<Option<String>> {
        let mut segments = split_top_level(expr, '|')?.into_iter();
        let head = segments.next().unwrap_or_default().trim();
        let calls = segments.map(parse_call).collect::<AppResult<Vec<_>>>()?;

        let value = self.evaluate_head(head, data)?;
        self.filters.apply_calls(value.as_deref(), &calls)
    }

    fn evaluate_head(&self, head: &str, data: &Value) -> AppResult<Option<String>> {
        if let Some(inner) = head
            .strip_prefix("$t(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return self.evaluate_translation(head, inner).map(Some);
        }

        let starts_literal = head
            .chars()
            .next()
            .is_some_and(|c| c == '\'' || c == '"' || c == '-' || c.is_ascii_digit());
        if starts_literal || matches!(head, "true" | "false" | "null") {
            return Ok(coerce_value(&parse_literal(head)?));
        }

        if !is_field_path(head) {
            return Err(AppError::FilterSyntax {
                expr: head.to_string(),
                reason: "expected a field path, a literal or $t(...)".to_string(),
            });
        }
        Ok(coerce_value(lookup(data, head).unwrap_or(&Value::Null)))
    }

    fn evaluate_translation(&self, head: &str, inner: &str) -> AppResult<String> {
        let mut values = parse_args(inner)?.into_iter();
        let Some(Value::String(key)) = values.next() else {
            return Err(AppError::FilterSyntax {
                expr: head.to_string(),
                reason: "$t expects a message key string first".to_string(),
            });
        };

        let mut args = Args::new();
        for value in values {
            match value {
                Value::Array(items) => {
                    for item in &items {
                        args.push(coerce_value(item).unwrap_or_default());
                    }
                }
                Value::Object(map) => {
                    for (name, item) in &map {
                        args.insert(name.clone(), coerce_value(item).unwrap_or_default());
                    }
                }
                other => args.push(coerce_value(&other).unwrap_or_default()),
            }
        }
        Ok(self.translator.t(&key, &args))
    }

    /// Replaces every `{{ ... }}` in `template`. Expressions that produce
    /// nothing render as an empty string.
    pub fn render(&self, template: &str, data: &Value) -> AppResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0;

        while let Some(open) = rest.find(OPEN) {
            out.push_str(&rest[..open]);
            let body_start = open + OPEN.len();
            let close = rest[body_start..]
                .find(CLOSE)
                .ok_or_else(|| AppError::TemplateSyntax {
                    offset: offset + open,
                    reason: "unterminated '{{'".to_string(),
                })?;
            let body = &rest[body_start..body_start + close];
            if let Some(text) = self.evaluate(body, data)? {
                out.push_str(&text);
            }
            let consumed = body_start + close + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

fn is_field_path(path: &str) -> bool {
    !path.is_empty()
        && path.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

/// Resolves `a.b.0.c` through objects and arrays.
fn lookup<'v>(data: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(data, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterOptions;
    use serde_json::json;

    fn fixtures() -> (FilterRegistry, Translator) {
        (
            FilterRegistry::with_defaults(&FilterOptions::default()).unwrap(),
            Translator::default(),
        )
    }

    #[test]
    fn renders_fields_through_filters() {
        let (filters, translator) = fixtures();
        let view = ViewContext::new(&filters, &translator);
        let data = json!({
            "page": { "name": "spot by the lake", "created_at": "2021-01-05T10:30:00" }
        });
        let out = view
            .render(
                "{{ page.name | shorten(4) | capitalize }} ({{ page.created_at | formatDate('YYYY-MM-DD') }})",
                &data,
            )
            .unwrap();
        assert_eq!(out, "Spot... (2021-01-05)");
    }

    #[test]
    fn falsy_and_missing_fields_render_empty() {
        let (filters, translator) = fixtures();
        let view = ViewContext::new(&filters, &translator);
        let data = json!({ "guests": 0, "bio": "" });
        assert_eq!(
            view.render("[{{ guests | shorten }}][{{ bio | capitalize }}][{{ nope.deeper }}]", &data)
                .unwrap(),
            "[][][]"
        );
    }

    #[test]
    fn translation_heads() {
        let (filters, translator) = fixtures();
        let view = ViewContext::new(&filters, &translator);
        let data = json!({});
        assert_eq!(
            view.render("{{ $t('message.auth.required', 'email') | capitalize }}", &data)
                .unwrap(),
            "Email is required"
        );
        assert_eq!(
            view.render("{{ $t('message.state', ['page', 'public']) }}", &data).unwrap(),
            "your page is now public"
        );
        assert_eq!(
            view.render("{{ $t('message.auth.password_hint', {len: 8}) }}", &data)
                .unwrap(),
            "password must contains 8 characters"
        );
    }

    #[test]
    fn array_paths_and_literals() {
        let (filters, translator) = fixtures();
        let view = ViewContext::new(&filters, &translator);
        let data = json!({ "activities": ["surf", "yoga"] });
        assert_eq!(
            view.render("{{ activities.1 | capitalize }} {{ 'x' | shorten(0) }} {{ 42 }}", &data)
                .unwrap(),
            "Yoga ... 42"
        );
    }

    #[test]
    fn syntax_errors_are_reported() {
        let (filters, translator) = fixtures();
        let view = ViewContext::new(&filters, &translator);
        let data = json!({});

        let err = view.render("hello {{ name ", &data).unwrap_err();
        assert!(matches!(err, AppError::TemplateSyntax { offset: 6, .. }));

        assert!(matches!(
            view.render("{{ name | missing }}", &data),
            Err(AppError::UnknownFilter(_))
        ));
        assert!(matches!(
            view.render("{{ a + b }}", &data),
            Err(AppError::FilterSyntax { .. })
        ));
    }

    #[test]
    fn pipe_and_t_shortcuts() {
        let (filters, translator) = fixtures();
        let view = ViewContext::new(&filters, &translator);
        assert_eq!(
            view.pipe(Some("hello"), "shorten(3)").unwrap().as_deref(),
            Some("hel...")
        );
        assert_eq!(view.t("pages", &Args::new()), "my spots");
        assert_eq!(
            view.filter("capitalize", Some("couchsport"), &[]).unwrap().as_deref(),
            Some("Couchsport")
        );
    }
}
