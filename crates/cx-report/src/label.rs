//! Category label compaction for table cells.

use std::sync::LazyLock;

use regex::Regex;

/// Matches "Masters 40", "Masters40", "masters 50 open" and captures the age.
static MASTERS_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^masters\s*(\d+)").expect("Invalid masters label regex"));

/// Compact "Masters NN" labels to "MaNN"; other labels pass through.
pub fn compact_category_label(label: &str) -> String {
    let trimmed = label.trim();
    match MASTERS_LABEL_REGEX.captures(trimmed) {
        Some(captures) => format!("Ma{}", &captures[1]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masters_labels_are_compacted() {
        assert_eq!(compact_category_label("Masters 40"), "Ma40");
        assert_eq!(compact_category_label("masters 50 open"), "Ma50");
        assert_eq!(compact_category_label("Masters60"), "Ma60");
    }

    #[test]
    fn test_other_labels_pass_through() {
        assert_eq!(compact_category_label("Senior"), "Senior");
        assert_eq!(compact_category_label(" Elite "), "Elite");
        assert_eq!(compact_category_label(""), "");
    }
}
