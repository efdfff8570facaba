use serde_json::Value;

/// Pulls a finite number out of an item value, or `None` when the value is unusable.
///
/// Precedence matters: JSON parsing is tried before plain numeric parsing, and an
/// object's `value` field wins over its `number` field.
pub fn try_extract_number(value: &Value) -> Option<f64> {
    let extracted = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => from_text(text),
        Value::Object(fields) => match (fields.get("value"), fields.get("number")) {
            (Some(Value::Number(number)), _) => number.as_f64(),
            (_, Some(Value::Number(number))) => number.as_f64(),
            // a whole object never coerces to a usable number
            _ => None,
        },
        Value::Array(elements) => coerce_array(elements),
        Value::Bool(_) | Value::Null => None,
    };
    extracted.filter(|number| number.is_finite())
}

fn from_text(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    if let Ok(Value::Number(number)) = serde_json::from_str::<Value>(text) {
        return number.as_f64();
    }
    text.trim().parse::<f64>().ok()
}

// Single-element arrays coerce through their element; zero and NaN are unusable.
fn coerce_array(elements: &[Value]) -> Option<f64> {
    let coerced = match elements {
        [Value::Number(number)] => number.as_f64(),
        [Value::String(text)] => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    coerced.filter(|number| *number != 0.0 && !number.is_nan())
}
