//! Normalizers for numeric and boolean input.

use serde_json::{Number, Value};

/// Pass numbers through; parse numeric-looking strings; everything else
/// becomes `Null`.
#[must_use]
pub fn number(raw: &Value) -> Value {
    match raw {
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<f64>() {
                Ok(parsed) => Number::from_f64(parsed).map_or(Value::Null, Value::Number),
                Err(_) => Value::Null,
            }
        }
        _ => Value::Null,
    }
}

/// Like [`number`], but only whole values survive; fractional input becomes
/// `Null` rather than being rounded.
#[must_use]
pub fn integer(raw: &Value) -> Value {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else {
                Value::Null
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_or(Value::Null, |i| Value::Number(i.into())),
        _ => Value::Null,
    }
}

/// Pass booleans through; coerce the common string spellings; everything else
/// becomes `Null`.
#[must_use]
pub fn boolean(raw: &Value) -> Value {
    match raw {
        Value::Bool(b) => Value::Bool(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Value::Bool(true),
            "false" | "0" => Value::Bool(false),
            _ => Value::Null,
        },
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(6.25), json!(6.25))]
    #[case(json!("6.25"), json!(6.25))]
    #[case(json!(" 42 "), json!(42.0))]
    #[case(json!("twelve"), Value::Null)]
    #[case(json!(""), Value::Null)]
    #[case(json!("NaN"), Value::Null)]
    #[case(json!("inf"), Value::Null)]
    #[case(Value::Null, Value::Null)]
    #[case(json!(true), Value::Null)]
    fn number_cases(#[case] raw: Value, #[case] expected: Value) {
        assert_eq!(number(&raw), expected);
    }

    #[rstest]
    #[case(json!(45), json!(45))]
    #[case(json!("45"), json!(45))]
    #[case(json!(-3), json!(-3))]
    #[case(json!(3.5), Value::Null)]
    #[case(json!("3.5"), Value::Null)]
    #[case(json!("many"), Value::Null)]
    #[case(Value::Null, Value::Null)]
    fn integer_cases(#[case] raw: Value, #[case] expected: Value) {
        assert_eq!(integer(&raw), expected);
    }

    #[rstest]
    #[case(json!(true), json!(true))]
    #[case(json!(false), json!(false))]
    #[case(json!("true"), json!(true))]
    #[case(json!("FALSE"), json!(false))]
    #[case(json!("1"), json!(true))]
    #[case(json!("0"), json!(false))]
    #[case(json!("yes"), Value::Null)]
    #[case(json!(1), Value::Null)]
    #[case(Value::Null, Value::Null)]
    fn boolean_cases(#[case] raw: Value, #[case] expected: Value) {
        assert_eq!(boolean(&raw), expected);
    }

    #[rstest]
    #[case(json!(6.25))]
    #[case(json!(45))]
    #[case(json!(true))]
    #[case(Value::Null)]
    fn idempotent_on_canonical_values(#[case] canonical: Value) {
        assert_eq!(number(&number(&canonical)), number(&canonical));
        assert_eq!(integer(&integer(&canonical)), integer(&canonical));
        assert_eq!(boolean(&boolean(&canonical)), boolean(&canonical));
    }
}
