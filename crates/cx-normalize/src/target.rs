//! Canonical spelling selection for a matched pair.
//!
//! The spelling seen more often wins; ties fall to the longer name, then to
//! the lexicographically greater one so the choice is deterministic.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use cx_model::RiderIdentity;

pub(crate) fn choose_rider_target(
    a: &RiderIdentity,
    b: &RiderIdentity,
    counts: &BTreeMap<RiderIdentity, usize>,
) -> RiderIdentity {
    let count_a = counts.get(a).copied().unwrap_or(0);
    let count_b = counts.get(b).copied().unwrap_or(0);
    match count_a
        .cmp(&count_b)
        .then_with(|| a.name_len().cmp(&b.name_len()))
        .then_with(|| a.cmp(b))
    {
        Ordering::Less => b.clone(),
        _ => a.clone(),
    }
}

pub(crate) fn choose_team_target(a: &str, b: &str, counts: &BTreeMap<String, usize>) -> String {
    let count_a = counts.get(a).copied().unwrap_or(0);
    let count_b = counts.get(b).copied().unwrap_or(0);
    match count_a
        .cmp(&count_b)
        .then_with(|| a.len().cmp(&b.len()))
        .then_with(|| a.cmp(b))
    {
        Ordering::Less => b.to_string(),
        _ => a.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rider(last: &str, first: &str) -> RiderIdentity {
        RiderIdentity::new(last, first)
    }

    #[test]
    fn test_higher_count_wins() {
        let a = rider("SMITH", "Mike");
        let b = rider("SMITH", "Michael");
        let counts = BTreeMap::from([(a.clone(), 5), (b.clone(), 2)]);
        assert_eq!(choose_rider_target(&a, &b, &counts), a);
    }

    #[test]
    fn test_equal_counts_longer_name_wins() {
        let a = rider("SMITH", "Mike");
        let b = rider("SMITH", "Michael");
        let counts = BTreeMap::from([(a.clone(), 1), (b.clone(), 1)]);
        assert_eq!(choose_rider_target(&a, &b, &counts), b);
    }

    #[test]
    fn test_full_tie_falls_to_greater_spelling() {
        let a = rider("SMITH", "Anna");
        let b = rider("SMITH", "Anne");
        let counts = BTreeMap::new();
        assert_eq!(choose_rider_target(&a, &b, &counts), b);
    }

    #[test]
    fn test_team_target_prefers_longer_name_on_tie() {
        let counts = BTreeMap::new();
        assert_eq!(
            choose_team_target("Team Alpha CC", "Team Alpha", &counts),
            "Team Alpha CC"
        );
    }
}
