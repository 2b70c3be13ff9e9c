//! Cell text shaping applied at ingest.

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    let mut parts = raw.split_whitespace();
    let mut collapsed = String::new();
    if let Some(first) = parts.next() {
        collapsed.push_str(first);
        for part in parts {
            collapsed.push(' ');
            collapsed.push_str(part);
        }
    }
    collapsed
}

/// Shape a last name: collapsed whitespace, upper-cased.
pub fn shape_last_name(raw: &str) -> String {
    collapse_whitespace(raw).to_uppercase()
}

/// Shape a first name: collapsed whitespace, title-cased.
pub fn shape_first_name(raw: &str) -> String {
    title_case(&collapse_whitespace(raw))
}

/// Title-case every alphabetic run: first letter upper, the rest lower.
fn title_case(value: &str) -> String {
    let mut shaped = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                shaped.extend(ch.to_uppercase());
            } else {
                shaped.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            shaped.push(ch);
            at_word_start = true;
        }
    }
    shaped
}
