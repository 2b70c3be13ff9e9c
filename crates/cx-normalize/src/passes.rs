//! The four normalization passes.
//!
//! Each pass takes the maps built so far and returns them extended. Pairs
//! are always visited in sorted order so repeated runs over the same season
//! produce the same maps.

use std::collections::{BTreeMap, BTreeSet};

use rapidfuzz::distance::indel;
use tracing::info;

use cx_model::RiderIdentity;

use crate::similar::{edit_distance, names_similar};
use crate::target::{choose_rider_target, choose_team_target};

/// Minimum similarity ratio for two team names to be considered the same.
const TEAM_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Abbreviations expanded when a team is observed under the short form.
const PREDEFINED_TEAM_EXPANSIONS: [(&str, &str); 1] = [("LEC", "Limited Edition Cycling")];

/// Pass 1: merge spellings that collide case-insensitively.
///
/// Riders are grouped by their upper-cased name pair; within a group the
/// representative is re-chosen as each member arrives and losers map to the
/// current winner, forming a chain that resolution follows to the end.
pub(crate) fn exact_rider_pass(
    riders: &BTreeSet<RiderIdentity>,
    counts: &BTreeMap<RiderIdentity, usize>,
) -> BTreeMap<RiderIdentity, RiderIdentity> {
    let mut map = BTreeMap::new();
    let mut representatives: BTreeMap<(String, String), RiderIdentity> = BTreeMap::new();

    for rider in riders {
        let key = rider.folded();
        let Some(existing) = representatives.get(&key) else {
            representatives.insert(key, rider.clone());
            continue;
        };

        let target = choose_rider_target(rider, existing, counts);
        if *rider != target {
            info!(source = %rider, target = %target, "rider normalized (exact)");
            map.insert(rider.clone(), target.clone());
        }
        if *existing != target {
            info!(source = %existing, target = %target, "rider normalized (exact)");
            map.insert(existing.clone(), target.clone());
        }
        representatives.insert(key, target);
    }

    map
}

/// Pass 2: merge riders whose names are similar rather than identical.
///
/// A pair is skipped when either side was already normalized by an earlier
/// decision, so the first match in sorted order wins.
pub(crate) fn similar_rider_pass(
    riders: &BTreeSet<RiderIdentity>,
    counts: &BTreeMap<RiderIdentity, usize>,
    mut map: BTreeMap<RiderIdentity, RiderIdentity>,
) -> BTreeMap<RiderIdentity, RiderIdentity> {
    for (a, b) in similar_rider_pairs(riders) {
        if map.contains_key(&a) || map.contains_key(&b) {
            continue;
        }

        let target = choose_rider_target(&a, &b, counts);
        if a != target {
            info!(source = %a, target = %target, "rider normalized (similar)");
            map.insert(a, target.clone());
        }
        if b != target {
            info!(source = %b, target = %target, "rider normalized (similar)");
            map.insert(b, target);
        }
    }

    map
}

/// Find rider pairs that plausibly refer to the same person.
///
/// One exact name plus one similar name is the reliable case. When both
/// names differ the rules tighten: both must be known variations, or both a
/// single edit apart, or both typo-similar with long surnames sharing a
/// first letter.
fn similar_rider_pairs(riders: &BTreeSet<RiderIdentity>) -> Vec<(RiderIdentity, RiderIdentity)> {
    let list: Vec<&RiderIdentity> = riders.iter().collect();
    let mut pairs = Vec::new();

    for (i, a) in list.iter().enumerate() {
        for b in &list[i + 1..] {
            if a.last_name.is_empty()
                || b.last_name.is_empty()
                || a.first_name.is_empty()
                || b.first_name.is_empty()
            {
                continue;
            }
            if a.folded() == b.folded() {
                continue;
            }

            let last_match = a.last_name.eq_ignore_ascii_case(&b.last_name);
            let first_match = a.first_name.eq_ignore_ascii_case(&b.first_name);

            let matched = if last_match {
                names_similar(&a.first_name, &b.first_name, true)
            } else if first_match {
                names_similar(&a.last_name, &b.last_name, true)
            } else if names_similar(&a.last_name, &b.last_name, false)
                && names_similar(&a.first_name, &b.first_name, false)
            {
                true
            } else if names_similar(&a.last_name, &b.last_name, true)
                && names_similar(&a.first_name, &b.first_name, true)
            {
                both_single_edits(a, b) || long_surname_typo(a, b)
            } else {
                false
            };

            if matched {
                pairs.push(((*a).clone(), (*b).clone()));
            }
        }
    }

    pairs
}

fn both_single_edits(a: &RiderIdentity, b: &RiderIdentity) -> bool {
    edit_distance(&a.last_name.to_uppercase(), &b.last_name.to_uppercase()) == 1
        && edit_distance(&a.first_name.to_uppercase(), &b.first_name.to_uppercase()) == 1
}

/// Typos in both names are only trusted for long surnames sharing a first
/// letter; short surnames a letter apart are usually different people.
fn long_surname_typo(a: &RiderIdentity, b: &RiderIdentity) -> bool {
    a.last_name.chars().count() > 6
        && b.last_name.chars().count() > 6
        && match (a.last_name.chars().next(), b.last_name.chars().next()) {
            (Some(x), Some(y)) => x.eq_ignore_ascii_case(&y),
            _ => false,
        }
}

/// Pass 3: merge team names whose similarity ratio clears the threshold.
pub(crate) fn similar_team_pass(
    teams: &BTreeSet<String>,
    counts: &BTreeMap<String, usize>,
) -> BTreeMap<String, String> {
    let list: Vec<&String> = teams.iter().collect();
    let mut map = BTreeMap::new();

    for (i, a) in list.iter().enumerate() {
        for b in &list[i + 1..] {
            let ratio =
                indel::normalized_similarity(a.to_uppercase().chars(), b.to_uppercase().chars());
            if ratio < TEAM_SIMILARITY_THRESHOLD {
                continue;
            }
            if map.contains_key(*a) || map.contains_key(*b) {
                continue;
            }

            let target = choose_team_target(a, b, counts);
            if **a != target {
                info!(source = %a, target = %target, ratio, "team normalized");
                map.insert((*a).clone(), target.clone());
            }
            if **b != target {
                info!(source = %b, target = %target, ratio, "team normalized");
                map.insert((*b).clone(), target.clone());
            }
        }
    }

    map
}

/// Pass 4: expand predefined abbreviations.
///
/// Only fills gaps: a team already normalized by pass 3 keeps that mapping.
pub(crate) fn predefined_team_pass(
    teams: &BTreeSet<String>,
    mut map: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    for (abbreviation, expansion) in PREDEFINED_TEAM_EXPANSIONS {
        for team in teams {
            if team.eq_ignore_ascii_case(abbreviation) && !map.contains_key(team) {
                info!(source = %team, target = %expansion, "team normalized (predefined)");
                map.insert(team.clone(), expansion.to_string());
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rider(last: &str, first: &str) -> RiderIdentity {
        RiderIdentity::new(last, first)
    }

    fn rider_set(riders: &[RiderIdentity]) -> BTreeSet<RiderIdentity> {
        riders.iter().cloned().collect()
    }

    fn counts_of(riders: &[(RiderIdentity, usize)]) -> BTreeMap<RiderIdentity, usize> {
        riders.iter().cloned().collect()
    }

    #[test]
    fn test_exact_pass_merges_case_variants() {
        let a = rider("SMITH", "Michael");
        let b = rider("Smith", "michael");
        let counts = counts_of(&[(a.clone(), 3), (b.clone(), 1)]);
        let map = exact_rider_pass(&rider_set(&[a.clone(), b.clone()]), &counts);

        assert_eq!(map.get(&b), Some(&a));
        assert!(!map.contains_key(&a));
    }

    #[test]
    fn test_similar_pass_merges_nickname_with_exact_surname() {
        let full = rider("SMITH", "Michael");
        let nick = rider("SMITH", "Mike");
        let counts = counts_of(&[(full.clone(), 1), (nick.clone(), 1)]);
        let map = similar_rider_pass(
            &rider_set(&[full.clone(), nick.clone()]),
            &counts,
            BTreeMap::new(),
        );

        // Equal counts, so the longer spelling wins.
        assert_eq!(map.get(&nick), Some(&full));
    }

    #[test]
    fn test_similar_pass_needs_both_names_similar() {
        // Surnames a letter apart, but the first names share nothing.
        let a = rider("PENYS", "Mark");
        let b = rider("DENYS", "Lisa");
        let counts = BTreeMap::new();
        let map = similar_rider_pass(&rider_set(&[a, b]), &counts, BTreeMap::new());
        assert!(map.is_empty());
    }

    #[test]
    fn test_similar_pass_accepts_double_typo_pair() {
        let a = rider("HOPE", "Steven");
        let b = rider("POPE", "Stevan");
        let counts = BTreeMap::new();
        let map = similar_rider_pass(
            &rider_set(&[a.clone(), b.clone()]),
            &counts,
            BTreeMap::new(),
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_similar_pass_trusts_long_surnames_sharing_first_letter() {
        // Surname typo plus a nickname: accepted only because the surnames
        // are long and start with the same letter.
        let a = rider("ROBERTSON", "Michael");
        let b = rider("ROBERTSEN", "Mike");
        let counts = BTreeMap::new();
        let map = similar_rider_pass(
            &rider_set(&[a.clone(), b.clone()]),
            &counts,
            BTreeMap::new(),
        );
        assert_eq!(map.get(&b), Some(&a));
    }

    #[test]
    fn test_similar_pass_skips_already_normalized() {
        let full = rider("SMITH", "Michael");
        let nick = rider("SMITH", "Mike");
        let existing = BTreeMap::from([(nick.clone(), rider("SMYTH", "Mike"))]);
        let counts = BTreeMap::new();
        let map = similar_rider_pass(&rider_set(&[full, nick.clone()]), &counts, existing);

        assert_eq!(map.get(&nick), Some(&rider("SMYTH", "Mike")));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_team_pass_merges_close_spellings() {
        let teams: BTreeSet<String> = ["Velo Club Racing".to_string(), "Velo Club Racin".to_string()]
            .into_iter()
            .collect();
        let counts = BTreeMap::new();
        let map = similar_team_pass(&teams, &counts);

        assert_eq!(
            map.get("Velo Club Racin").map(String::as_str),
            Some("Velo Club Racing")
        );
    }

    #[test]
    fn test_team_pass_leaves_distinct_teams_alone() {
        let teams: BTreeSet<String> = ["Team Alpha".to_string(), "Nova Riders".to_string()]
            .into_iter()
            .collect();
        let map = similar_team_pass(&teams, &BTreeMap::new());
        assert!(map.is_empty());
    }

    #[test]
    fn test_predefined_pass_expands_abbreviation() {
        let teams: BTreeSet<String> = ["lec".to_string()].into_iter().collect();
        let map = predefined_team_pass(&teams, BTreeMap::new());
        assert_eq!(
            map.get("lec").map(String::as_str),
            Some("Limited Edition Cycling")
        );
    }

    #[test]
    fn test_predefined_pass_does_not_override_existing_mapping() {
        let teams: BTreeSet<String> = ["LEC".to_string()].into_iter().collect();
        let existing = BTreeMap::from([("LEC".to_string(), "Le Club".to_string())]);
        let map = predefined_team_pass(&teams, existing);
        assert_eq!(map.get("LEC").map(String::as_str), Some("Le Club"));
    }
}
