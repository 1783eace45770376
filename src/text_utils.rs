use tracing::trace;

/// Remove a single leading `N. ` enumeration marker.
///
/// The marker must be digits followed by a period and then whitespace or the
/// end of the text, so decimals such as `1.5 kWh` are left untouched.
pub fn strip_enumeration(line: &str) -> &str {
    let trimmed = line.trim_start();
    let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == trimmed.len() {
        return trimmed;
    }
    match rest.strip_prefix('.') {
        Some(after) if after.is_empty() || after.starts_with(char::is_whitespace) => {
            after.trim_start()
        }
        _ => trimmed,
    }
}

fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == '*'
}

/// Clean one candidate tip.
///
/// Surrounding whitespace and Markdown emphasis (`*`, `**`) are trimmed
/// before and after dropping the enumeration marker. Returns `None` when
/// nothing is left.
pub fn clean_candidate(line: &str) -> Option<String> {
    trace!(?line, "Cleaning tip candidate");
    let cleaned = strip_enumeration(line.trim_matches(is_padding)).trim_matches(is_padding);
    if cleaned.is_empty() {
        trace!("Candidate empty after cleaning");
        None
    } else {
        Some(cleaned.to_string())
    }
}
