//! Parser for template filter chains: `shorten(5) | capitalize`.

use crate::error::{AppError, AppResult};
use serde_json::{Number, Value};

/// One `name(args...)` step of a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCall {
    pub name: String,
    pub args: Vec<Value>,
}

pub fn parse_chain(expr: &str) -> AppResult<Vec<FilterCall>> {
    if expr.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_top_level(expr, '|')?
        .into_iter()
        .map(parse_call)
        .collect()
}

pub fn parse_call(segment: &str) -> AppResult<FilterCall> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Err(syntax(segment, "empty filter"));
    }

    let (name, args) = match segment.find('(') {
        Some(open) => {
            let inner = segment[open + 1..]
                .strip_suffix(')')
                .ok_or_else(|| syntax(segment, "expected ')' at the end of the call"))?;
            (segment[..open].trim(), parse_args(inner)?)
        }
        None => (segment, Vec::new()),
    };

    if !is_identifier(name) {
        return Err(syntax(segment, "filter name must be an identifier"));
    }
    Ok(FilterCall {
        name: name.to_string(),
        args,
    })
}

/// Comma separated literal list, as found between call parentheses.
pub fn parse_args(inner: &str) -> AppResult<Vec<Value>> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_top_level(inner, ',')?
        .into_iter()
        .map(parse_literal)
        .collect()
}

/// Number, quoted string, `true`, `false`, `null`, or an array / object of
/// those (`['a', 1]`, `{len: 8}`).
pub fn parse_literal(token: &str) -> AppResult<Value> {
    let token = token.trim();
    match token {
        "" => return Err(syntax(token, "missing argument")),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "null" | "undefined" => return Ok(Value::Null),
        _ => {}
    }

    if let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        return parse_args(inner).map(Value::Array);
    }
    if let Some(inner) = token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
        return parse_object(inner);
    }

    if let Some(quote) = token.chars().next().filter(|c| *c == '\'' || *c == '"') {
        let body = token[1..]
            .strip_suffix(quote)
            .ok_or_else(|| syntax(token, "unterminated string"))?;
        return unescape(body).map(Value::String);
    }

    if let Ok(int) = token.parse::<i64>() {
        return Ok(Value::from(int));
    }
    token
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| syntax(token, "unsupported argument"))
}

fn parse_object(inner: &str) -> AppResult<Value> {
    let mut map = serde_json::Map::new();
    if inner.trim().is_empty() {
        return Ok(Value::Object(map));
    }
    for entry in split_top_level(inner, ',')? {
        let parts = split_top_level(entry, ':')?;
        let [key, value] = parts.as_slice() else {
            return Err(syntax(entry, "expected 'key: value'"));
        };
        let key = match parse_literal(key) {
            Ok(Value::String(quoted)) => quoted,
            _ if is_identifier(key.trim()) => key.trim().to_string(),
            _ => return Err(syntax(entry, "object keys must be names or strings")),
        };
        map.insert(key, parse_literal(value)?);
    }
    Ok(Value::Object(map))
}

/// Splits on `sep` outside of quotes and brackets.
pub fn split_top_level(expr: &str, sep: char) -> AppResult<Vec<&str>> {
    let mut parts = Vec::new();
    let mut open: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in expr.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' | '[' | '{' => open.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if open.pop() != Some(expected) {
                    return Err(syntax(expr, "unbalanced brackets"));
                }
            }
            c if c == sep && open.is_empty() => {
                parts.push(&expr[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if quote.is_some() {
        return Err(syntax(expr, "unterminated string"));
    }
    if !open.is_empty() {
        return Err(syntax(expr, "unbalanced brackets"));
    }
    parts.push(&expr[start..]);
    Ok(parts)
}

fn unescape(body: &str) -> AppResult<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => return Err(syntax(body, "dangling escape")),
        }
    }
    Ok(out)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn syntax(expr: &str, reason: &str) -> AppError {
    AppError::FilterSyntax {
        expr: expr.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_and_called_filters() {
        let chain = parse_chain("shorten(5) | capitalize").unwrap();
        assert_eq!(
            chain,
            vec![
                FilterCall {
                    name: "shorten".into(),
                    args: vec![json!(5)]
                },
                FilterCall {
                    name: "capitalize".into(),
                    args: vec![]
                },
            ]
        );
    }

    #[test]
    fn quoted_args_may_contain_separators() {
        let chain = parse_chain(r#"formatDate('DD | MM, YYYY') | shorten("(3)")"#).unwrap();
        assert_eq!(chain[0].args, vec![json!("DD | MM, YYYY")]);
        assert_eq!(chain[1].args, vec![json!("(3)")]);
    }

    #[test]
    fn literal_kinds() {
        assert_eq!(parse_literal("-2").unwrap(), json!(-2));
        assert_eq!(parse_literal("2.5").unwrap(), json!(2.5));
        assert_eq!(parse_literal("null").unwrap(), Value::Null);
        assert_eq!(parse_literal("true").unwrap(), json!(true));
        assert_eq!(parse_literal(r"'it\'s'").unwrap(), json!("it's"));
        assert_eq!(parse_literal("['a', 2]").unwrap(), json!(["a", 2]));
        assert_eq!(parse_literal("{len: 8, 'to': 'x:y'}").unwrap(), json!({"len": 8, "to": "x:y"}));
        assert_eq!(parse_literal("[]").unwrap(), json!([]));
        assert!(parse_literal("{len}").is_err());
        assert!(parse_literal("value").is_err());
        assert!(parse_literal("'open").is_err());
    }

    #[test]
    fn empty_chain_is_no_filters() {
        assert!(parse_chain("   ").unwrap().is_empty());
    }

    #[test]
    fn malformed_chains() {
        for bad in ["shorten(5", "shorten)", "a || b", "9lives", "shorten(1,)", "f('x)", "f([1)]"] {
            assert!(
                matches!(parse_chain(bad), Err(AppError::FilterSyntax { .. })),
                "accepted {:?}",
                bad
            );
        }
    }
}
