//! Canonical name resolution through a normalization map.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use tracing::warn;

/// Follow map entries until a name with no further mapping is reached.
///
/// A map that loops (a -> b, b -> a) would never terminate, so every visited
/// name is tracked and the walk stops as soon as one repeats.
pub fn resolve<T>(start: &T, map: &BTreeMap<T, T>) -> T
where
    T: Clone + Ord + Display,
{
    let mut canonical = start.clone();
    let mut visited: BTreeSet<T> = BTreeSet::new();

    while let Some(next) = map.get(&canonical) {
        if !visited.insert(canonical.clone()) {
            warn!(name = %canonical, "normalization cycle detected, stopping");
            break;
        }
        canonical = next.clone();
    }

    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_name_resolves_to_itself() {
        let map: BTreeMap<String, String> = BTreeMap::new();
        assert_eq!(resolve(&"Solo".to_string(), &map), "Solo");
    }

    #[test]
    fn test_chain_resolves_to_final_target() {
        let map = BTreeMap::from([
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "c".to_string()),
        ]);
        assert_eq!(resolve(&"a".to_string(), &map), "c");
    }

    #[test]
    fn test_cycle_terminates() {
        let map = BTreeMap::from([
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "a".to_string()),
        ]);
        // Walks a -> b -> a, then stops on the repeat.
        assert_eq!(resolve(&"a".to_string(), &map), "a");
    }
}
