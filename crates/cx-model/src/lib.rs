pub mod category;
pub mod points;
pub mod row;
pub mod standings;

pub use category::Category;
pub use points::points_for_position;
pub use row::{ResultRow, RiderIdentity};
pub use standings::{CategoryStandingEntry, CategoryStandings, TeamStandingEntry};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn standing_entry_invariant_holds_for_short_seasons() {
        // With fewer than 3 rounds the exclusion column equals the total.
        let entry = CategoryStandingEntry {
            last_name: "JONES".to_string(),
            first_name: "Sarah".to_string(),
            team: String::new(),
            category_label: String::new(),
            gender: String::new(),
            points_by_round: BTreeMap::from([(1, 100), (2, 94)]),
            total_points: 194,
            points_excl_lowest: 194,
        };
        assert!(entry.points_excl_lowest <= entry.total_points);
        assert_eq!(entry.points_excl_lowest, entry.total_points);
    }

    #[test]
    fn row_points_follow_position() {
        let row = ResultRow {
            round: 1,
            position: 3,
            points: points_for_position(3),
            last_name: "SMITH".to_string(),
            first_name: "Michael".to_string(),
            team: "Team A".to_string(),
            category: Category::Mens,
            category_label: String::new(),
            gender: String::new(),
        };
        assert_eq!(row.points, 90);
        assert_eq!(row.rider(), RiderIdentity::new("SMITH", "Michael"));
    }
}
