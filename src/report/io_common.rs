use crate::report::*;

/// Reads a number that may be written as a JSON number or as a string.
/// A missing value or `null` gives `None`.
pub fn read_js_number(x: &Option<JSValue>, fips: &str, field: &str) -> ReportResult<Option<f64>> {
    let fail = |value: String| {
        ParsingJsonNumberSnafu {
            fips,
            field,
            value,
        }
        .fail()
    };
    match x {
        None | Some(JSValue::Null) => Ok(None),
        Some(JSValue::Number(n)) => match n.as_f64() {
            Some(v) => Ok(Some(v)),
            None => fail(n.to_string()),
        },
        Some(JSValue::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => fail(s.clone()),
        },
        Some(other) => fail(other.to_string()),
    }
}

/// Reads a value that is kept as text, such as the purge percentage.
pub fn read_js_text(x: &Option<JSValue>, fips: &str, field: &str) -> ReportResult<Option<String>> {
    match x {
        None | Some(JSValue::Null) => Ok(None),
        Some(JSValue::String(s)) => Ok(Some(s.clone())),
        Some(JSValue::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => ParsingJsonNumberSnafu {
            fips,
            field,
            value: other.to_string(),
        }
        .fail(),
    }
}
