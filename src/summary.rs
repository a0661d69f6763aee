//! Bullet normalization for generated summaries.
//!
//! Every output line starts with `"- "`, whatever marker style the model used.
//! Leading indentation is trimmed, so sub-bullet nesting is flattened.

/// Canonical bullet marker.
pub const BULLET: &str = "- ";

/// Normalize model output into a flat `"- "` bullet list.
///
/// Lines are trimmed and blank lines dropped. Lines starting with `"- "` are kept,
/// `•` and `"* "` markers are rewritten, and any other line gets `"- "` prepended.
/// A line consisting only of a marker carries no content and is dropped.
pub fn normalize_bullets(text: &str) -> String {
    text.lines()
        .filter_map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || matches!(line, "-" | "*" | "•") {
        return None;
    }

    if line.starts_with(BULLET) {
        return Some(line.to_string());
    }

    let rest = line
        .strip_prefix('•')
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim);

    match rest {
        Some("") => None,
        Some(rest) => Some(format!("{}{}", BULLET, rest)),
        None => Some(format!("{}{}", BULLET, line)),
    }
}
