use couch_core::filters::{Filter, FilterOptions};
use couch_core::{AppError, FilterRegistry, Translator, ViewContext};
use serde_json::{json, Value};

#[derive(Debug)]
struct Shout;

impl Filter for Shout {
    fn name(&self) -> &str {
        "shout"
    }

    fn description(&self) -> &str {
        "Uppercase everything"
    }

    fn apply(&self, value: Option<&str>, _args: &[Value]) -> Option<String> {
        value.filter(|v| !v.is_empty()).map(str::to_uppercase)
    }
}

#[test]
fn test_custom_filters_join_the_builtins() {
    let mut filters = FilterRegistry::with_defaults(&FilterOptions::default()).unwrap();
    filters.register(Box::new(Shout)).unwrap();
    assert!(matches!(
        filters.register(Box::new(Shout)),
        Err(AppError::DuplicateFilter(name)) if name == "shout"
    ));

    let translator = Translator::default();
    let view = ViewContext::new(&filters, &translator);
    let out = view
        .render(
            "{{ spot.name | shorten(6) | shout }}",
            &json!({ "spot": { "name": "annecy lake" } }),
        )
        .unwrap();
    assert_eq!(out, "ANNECY...");
}

#[test]
fn test_page_card_template() {
    let filters = FilterRegistry::with_defaults(&FilterOptions::default()).unwrap();
    let translator = Translator::default();
    let view = ViewContext::new(&filters, &translator);

    let page = json!({
        "page": {
            "name": "secret reef",
            "description": "",
            "activities": ["surf", "snorkeling"],
            "created_at": "2019-07-14T08:05:00"
        }
    });
    let out = view
        .render(
            "{{ page.name | capitalize }} [{{ page.description | shorten(20) }}] \
             {{ page.activities.0 | capitalize }} - {{ page.created_at | formatDate('Do MMMM YYYY') }}",
            &page,
        )
        .unwrap();
    assert_eq!(out, "Secret reef [] Surf - 14th July 2019");
}

#[test]
fn test_text_outside_interpolations_is_untouched() {
    let filters = FilterRegistry::with_defaults(&FilterOptions::default()).unwrap();
    let translator = Translator::default();
    let view = ViewContext::new(&filters, &translator);
    assert_eq!(
        view.render("no {tags} here }}", &json!({})).unwrap(),
        "no {tags} here }}"
    );
}
