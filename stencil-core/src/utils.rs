//! Shared string utilities.

/// Convert a snake_case key to camelCase (e.g., "debug_only" -> "debugOnly").
///
/// Leading underscores are kept, and a key without underscores is returned
/// unchanged, so camelCase keys pass through as-is.
pub fn to_camel_case(s: &str) -> String {
    let trimmed = s.trim_start_matches('_');
    let prefix = &s[..s.len() - trimmed.len()];

    let mut result = String::from(prefix);
    let mut upper_next = false;
    for c in trimmed.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Render a list of strings the way the generator expects list arguments:
/// `["Widgets", "Extra"]`, or `[]` when empty.
pub fn format_string_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| serde_json::Value::from(item.as_ref()).to_string())
        .collect();
    format!("[{}]", quoted.join(", "))
}
