//! Finishing-position to points mapping.

/// Points for positions 1 through 12.
const POINTS_TABLE: [u32; 12] = [100, 94, 90, 86, 83, 80, 78, 76, 74, 72, 70, 69];

/// Points awarded for a finishing position.
///
/// Positions 1-12 use the fixed table; beyond that each place loses one
/// point until the award reaches zero. Position 0 scores nothing.
pub fn points_for_position(position: u32) -> u32 {
    match position {
        0 => 0,
        1..=12 => POINTS_TABLE[(position - 1) as usize],
        _ => 69u32.saturating_sub(position - 12),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn fixed_table_positions() {
        let expected = [100, 94, 90, 86, 83, 80, 78, 76, 74, 72, 70, 69];
        for (index, points) in expected.iter().enumerate() {
            assert_eq!(points_for_position(index as u32 + 1), *points);
        }
    }

    #[test]
    fn positions_beyond_table_decay_by_one() {
        assert_eq!(points_for_position(13), 68);
        assert_eq!(points_for_position(20), 61);
        assert_eq!(points_for_position(69), 12);
    }

    #[test]
    fn tail_positions_score_zero() {
        assert_eq!(points_for_position(81), 0);
        assert_eq!(points_for_position(82), 0);
        assert_eq!(points_for_position(1000), 0);
    }

    #[test]
    fn position_zero_scores_zero() {
        assert_eq!(points_for_position(0), 0);
    }

    proptest! {
        #[test]
        fn points_never_increase_with_position(position in 1u32..500) {
            prop_assert!(points_for_position(position + 1) <= points_for_position(position));
        }
    }
}
