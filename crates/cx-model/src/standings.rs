//! Season standings entries for riders and teams.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One rider's season summary within one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStandingEntry {
    pub last_name: String,
    pub first_name: String,
    pub team: String,
    /// Free-text category label carried through from the result sheets.
    pub category_label: String,
    pub gender: String,
    /// Round number to points earned that round; absent rounds were not ridden.
    pub points_by_round: BTreeMap<u32, u32>,
    /// Sum over all rounds.
    pub total_points: u32,
    /// Sum over the best `R - 1` rounds when the season has `R >= 3` rounds,
    /// otherwise equal to `total_points`.
    pub points_excl_lowest: u32,
}

/// Ranked standings for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStandings {
    pub category: Category,
    /// Highest round number observed across the category.
    pub max_round: u32,
    /// Entries in rank order.
    pub entries: Vec<CategoryStandingEntry>,
}

/// One team's aggregate of `points_excl_lowest` per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamStandingEntry {
    pub team: String,
    pub womens: u32,
    pub mens: u32,
    pub u12: u32,
    pub youth: u32,
    pub v40: u32,
    pub v50: u32,
    pub total: u32,
}

impl TeamStandingEntry {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Self::default()
        }
    }

    /// Add points into one category column and the grand total.
    pub fn add_points(&mut self, category: Category, points: u32) {
        let column = match category {
            Category::Womens => &mut self.womens,
            Category::Mens => &mut self.mens,
            Category::U12 => &mut self.u12,
            Category::Youth => &mut self.youth,
            Category::V40 => &mut self.v40,
            Category::V50 => &mut self.v50,
        };
        *column += points;
        self.total += points;
    }

    /// Points in one category column.
    pub fn points_for(&self, category: Category) -> u32 {
        match category {
            Category::Womens => self.womens,
            Category::Mens => self.mens,
            Category::U12 => self.u12,
            Category::Youth => self.youth,
            Category::V40 => self.v40,
            Category::V50 => self.v50,
        }
    }
}
