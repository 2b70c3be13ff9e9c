//! The six-category competition taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A competition class with its own independent standings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Womens,
    Mens,
    U12,
    Youth,
    V40,
    V50,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 6] = [
        Category::Womens,
        Category::Mens,
        Category::U12,
        Category::Youth,
        Category::V40,
        Category::V50,
    ];

    /// Short identifier used for output filenames and JSON keys.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Womens => "womens",
            Category::Mens => "mens",
            Category::U12 => "u12",
            Category::Youth => "youth",
            Category::V40 => "v40",
            Category::V50 => "v50",
        }
    }

    /// Display title used in table headings.
    pub fn title(self) -> &'static str {
        match self {
            Category::Womens => "Women",
            Category::Mens => "Senior Open",
            Category::U12 => "Under 12",
            Category::Youth => "Youth U16/U14",
            Category::V40 => "Veteran 40 Open",
            Category::V50 => "Veteran 50 Open",
        }
    }

    /// Filename keywords that select this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Womens => &["elite female", "elite women"],
            Category::Mens => &["elite open", "senior open", "senior"],
            Category::U12 => &["under 12", "u12"],
            Category::Youth => &["under 16", "u16"],
            Category::V40 => &["v40", "m40"],
            Category::V50 => &["v50", "m50"],
        }
    }

    /// Match a result filename to a category.
    ///
    /// Keywords are checked in taxonomy order, so "elite female" wins over
    /// the bare "senior" fallback. Returns `None` for unrecognized names.
    pub fn from_filename(filename: &str) -> Option<Category> {
        let lower = filename.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
    }

    /// Whether the rendered table carries the extra gender column.
    pub fn has_gender_column(self) -> bool {
        matches!(self, Category::Youth)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_womens_keywords() {
        assert_eq!(
            Category::from_filename("R3 Elite Female.csv"),
            Some(Category::Womens)
        );
        assert_eq!(
            Category::from_filename("elite women round 2.csv"),
            Some(Category::Womens)
        );
    }

    #[test]
    fn womens_wins_over_senior_fallback() {
        // "Elite Women" also contains no "senior" keyword, but make sure a
        // combined name resolves to the earlier category in taxonomy order.
        assert_eq!(
            Category::from_filename("Senior Open Elite Women.csv"),
            Some(Category::Womens)
        );
    }

    #[test]
    fn matches_remaining_categories() {
        assert_eq!(
            Category::from_filename("R4 Senior Open.csv"),
            Some(Category::Mens)
        );
        assert_eq!(Category::from_filename("Under 12.csv"), Some(Category::U12));
        assert_eq!(Category::from_filename("U16 race.csv"), Some(Category::Youth));
        assert_eq!(Category::from_filename("V40 open.csv"), Some(Category::V40));
        assert_eq!(Category::from_filename("M50.csv"), Some(Category::V50));
    }

    #[test]
    fn unknown_filename_returns_none() {
        assert_eq!(Category::from_filename("Marshals list.csv"), None);
    }

    #[test]
    fn slug_serializes_as_json_key() {
        let json = serde_json::to_string(&Category::V40).unwrap();
        assert_eq!(json, "\"v40\"");
    }
}
