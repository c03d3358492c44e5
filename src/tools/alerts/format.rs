use serde_json::Value;

use crate::domain::AlertFeature;

pub const UNKNOWN: &str = "Unknown";
pub const NO_HEADLINE: &str = "No headline";
pub const SEPARATOR: &str = "---";

/// Five labelled lines followed by the separator, newline-joined.
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    [
        format!("Event: {}", field(&props.event, UNKNOWN)),
        format!("Area: {}", field(&props.area_desc, UNKNOWN)),
        format!("Severity: {}", field(&props.severity, UNKNOWN)),
        format!("Status: {}", field(&props.status, UNKNOWN)),
        format!("Headline: {}", field(&props.headline, NO_HEADLINE)),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

/// Strings render verbatim (including ""), other JSON values in their JSON form.
fn field(value: &Option<Value>, placeholder: &str) -> String {
    match value {
        None | Some(Value::Null) => placeholder.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
