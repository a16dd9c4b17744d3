use rhai::Dynamic;

use crate::config::OutputFormat;

/// Render one script result, or `None` when there is nothing to print.
pub fn format_result(value: &Dynamic, format: OutputFormat) -> serde_json::Result<Option<String>> {
    match format {
        OutputFormat::Default if value.is_unit() => Ok(None),
        OutputFormat::Default => Ok(Some(display_value(value))),
        OutputFormat::Json => serde_json::to_string(&dynamic_to_json(value)).map(Some),
    }
}

/// Plain display: strings unquoted, arrays as `[a, b]`
fn display_value(value: &Dynamic) -> String {
    if let Some(arr) = value.read_lock::<rhai::Array>() {
        let items: Vec<String> = arr.iter().map(display_value).collect();
        format!("[{}]", items.join(", "))
    } else {
        value.to_string()
    }
}

/// Convert rhai::Dynamic to serde_json::Value recursively
pub fn dynamic_to_json(value: &Dynamic) -> serde_json::Value {
    if value.is_string() {
        value
            .clone()
            .into_string()
            .map(serde_json::Value::String)
            .unwrap_or(serde_json::Value::Null)
    } else if let Ok(i) = value.as_int() {
        serde_json::Value::Number(serde_json::Number::from(i))
    } else if let Ok(f) = value.as_float() {
        serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    } else if let Ok(b) = value.as_bool() {
        serde_json::Value::Bool(b)
    } else if value.is_unit() {
        serde_json::Value::Null
    } else if let Some(arr) = value.read_lock::<rhai::Array>() {
        serde_json::Value::Array(arr.iter().map(dynamic_to_json).collect())
    } else if let Some(map) = value.read_lock::<rhai::Map>() {
        let mut json_obj = serde_json::Map::new();
        for (key, val) in map.iter() {
            json_obj.insert(key.to_string(), dynamic_to_json(val));
        }
        serde_json::Value::Object(json_obj)
    } else {
        serde_json::Value::String(value.to_string())
    }
}
