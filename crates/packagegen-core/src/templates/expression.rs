//! Restricted evaluation of `<%= ... %>` template expressions
//!
//! An expression is a dotted property path into the template data, optionally
//! followed by one zero-argument method call. Only three methods exist:
//! `toUpperCase()`, `toLowerCase()`, and `getFullYear()`. There is no control
//! flow and no arbitrary evaluation, and an unknown key or method is a hard
//! error rather than an empty substitution, so a typo in a template can not
//! silently produce a broken package.

use serde_json::Value;
use thiserror::Error;

/// Opening delimiter of a template expression
const TAG_OPEN: &str = "<%=";
/// Closing delimiter of a template expression
const TAG_CLOSE: &str = "%>";

/// A template that could not be rendered against the given data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("unterminated template expression at byte {0}: missing closing \"%>\"")]
    Unterminated(usize),
    #[error("unknown template variable \"{0}\"")]
    UnknownVariable(String),
    #[error("unknown method \"{method}\" in template expression \"{expression}\"")]
    UnknownMethod { expression: String, method: String },
    #[error("template expression \"{0}\" does not resolve to a printable value")]
    NotInterpolatable(String),
    #[error("\"{method}\" in template expression \"{expression}\" needs a {expected} value")]
    WrongReceiver {
        expression: String,
        method: String,
        expected: &'static str,
    },
    #[error("malformed template expression \"{0}\"")]
    Malformed(String),
}

/// Substitute every `<%= ... %>` placeholder in `template` using `data`.
///
/// Text outside the delimiters passes through byte for byte, so templates
/// with no placeholders come back unchanged.
pub fn render(template: &str, data: &Value) -> Result<String, RenderError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(TAG_OPEN) {
        output.push_str(&rest[..open]);

        let offset = template.len() - rest.len() + open;
        let after_open = &rest[open + TAG_OPEN.len()..];
        let close = after_open
            .find(TAG_CLOSE)
            .ok_or(RenderError::Unterminated(offset))?;

        let expression = after_open[..close].trim();
        output.push_str(&evaluate(expression, data)?);

        rest = &after_open[close + TAG_CLOSE.len()..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Evaluate one expression: a dotted path with an optional trailing call.
fn evaluate(expression: &str, data: &Value) -> Result<String, RenderError> {
    let (path, method) = split_call(expression)?;
    if path.is_empty() {
        return Err(RenderError::Malformed(expression.to_string()));
    }

    let value = lookup(path, data)
        .ok_or_else(|| RenderError::UnknownVariable(path.to_string()))?;

    match method {
        Some(name) => call_method(expression, name, value),
        None => stringify(expression, value),
    }
}

/// Split `a.b.method()` into the property path and the called method, if any.
fn split_call(expression: &str) -> Result<(&str, Option<&str>), RenderError> {
    match expression.strip_suffix("()") {
        Some(prefix) => {
            let (path, method) = prefix
                .rsplit_once('.')
                .ok_or_else(|| RenderError::Malformed(expression.to_string()))?;
            Ok((path, Some(method)))
        }
        None if expression.contains('(') || expression.contains(')') => {
            Err(RenderError::Malformed(expression.to_string()))
        }
        None => Ok((expression, None)),
    }
}

/// Walk a dotted path through the data object.
fn lookup<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
    let mut current = data;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// Render a resolved value into output text.
fn stringify(expression: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(RenderError::NotInterpolatable(expression.to_string()))
        }
    }
}

/// Dispatch one of the allow-listed zero-argument methods.
fn call_method(expression: &str, method: &str, value: &Value) -> Result<String, RenderError> {
    match method {
        "toUpperCase" => Ok(expect_string(expression, method, value)?.to_uppercase()),
        "toLowerCase" => Ok(expect_string(expression, method, value)?.to_lowercase()),
        "getFullYear" => {
            let timestamp = expect_string(expression, method, value)?;
            // RFC 3339 timestamps start with the four-digit year
            let year: String = timestamp
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            if year.len() == 4 {
                Ok(year)
            } else {
                Err(RenderError::WrongReceiver {
                    expression: expression.to_string(),
                    method: method.to_string(),
                    expected: "RFC 3339 timestamp",
                })
            }
        }
        _ => Err(RenderError::UnknownMethod {
            expression: expression.to_string(),
            method: method.to_string(),
        }),
    }
}

fn expect_string<'a>(
    expression: &str,
    method: &str,
    value: &'a Value,
) -> Result<&'a str, RenderError> {
    value.as_str().ok_or_else(|| RenderError::WrongReceiver {
        expression: expression.to_string(),
        method: method.to_string(),
        expected: "string",
    })
}
