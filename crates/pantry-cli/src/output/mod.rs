use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// # Errors
///
/// Returns an error when the value cannot be serialized to JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => render_table(value),
    }
}

/// Print a serializable response in the requested format.
///
/// # Errors
///
/// Same failure modes as [`render`].
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut rows = Vec::with_capacity(map.len());
            for (key, value) in map {
                rows.push(vec![key, value_to_cell(&value)]);
            }
            Ok(table::render(&headers, &rows))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return "(empty)".to_string();
    }

    // Homogeneous object arrays become a column-per-key table; anything else
    // renders one cell per line.
    if let Some(first) = items[0].as_object() {
        let headers: Vec<&str> = first.keys().map(String::as_str).collect();
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                headers
                    .iter()
                    .map(|header| {
                        item.get(*header)
                            .map_or_else(|| "-".to_string(), value_to_cell)
                    })
                    .collect()
            })
            .collect();
        return table::render(&headers, &rows);
    }

    items
        .iter()
        .map(value_to_cell)
        .collect::<Vec<_>>()
        .join("\n")
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
