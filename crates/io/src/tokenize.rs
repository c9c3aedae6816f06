//! Quote-aware line splitting.

/// Split one line into field tokens.
///
/// A line containing a comma is split on commas outside double quotes; a
/// line without one is a single token. Each token is trimmed and one pair
/// of surrounding double quotes is stripped.
pub(crate) fn split_line(line: &str) -> Vec<String> {
    if !line.contains(',') {
        return vec![strip_token(line)];
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                tokens.push(strip_token(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    tokens.push(strip_token(&current));
    tokens
}

/// Trim, drop surrounding quote characters, trim what they enclosed.
fn strip_token(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.trim().to_string()
}
