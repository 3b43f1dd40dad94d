//! Legal start/end position pairs per CAP type.
//!
//! A partial sequence can be completed by a CAP only if it ends where the
//! CAP's position transform sends its start. The sets are built once on
//! first use from the transformation tables.

use crate::cap::error::{CapError, CapResult};
use crate::cap::rules::{rule_for, CAP_RULES};
use crate::models::{CapType, GridPosition, SliceSize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

type PairSet = HashSet<(GridPosition, GridPosition)>;

const SLICE_SIZES: [SliceSize; 2] = [SliceSize::Halved, SliceSize::Quartered];

static VALIDATION_SETS: LazyLock<HashMap<(CapType, SliceSize), PairSet>> = LazyLock::new(|| {
    let mut sets = HashMap::new();
    for rule in &CAP_RULES {
        for slice_size in SLICE_SIZES {
            let pairs: PairSet = GridPosition::ALL
                .into_iter()
                .filter_map(|start| {
                    rule.transform_position(start, slice_size)
                        .map(|end| (start, end))
                })
                .collect();
            sets.insert((rule.cap_type, slice_size), pairs);
        }
    }
    sets
});

/// Validation set for a CAP type at a slice size.
///
/// Halved-only CAP types return their halved set for either slice size.
#[must_use]
pub fn validation_set(cap_type: CapType, slice_size: SliceSize) -> Option<&'static PairSet> {
    let effective = rule_for(cap_type)?.effective_slice_size(slice_size);
    VALIDATION_SETS.get(&(cap_type, effective))
}

/// True when `(start, end)` is a legal pair for the CAP type.
#[must_use]
pub fn is_valid_pair(
    cap_type: CapType,
    slice_size: SliceSize,
    start: GridPosition,
    end: GridPosition,
) -> bool {
    validation_set(cap_type, slice_size).is_some_and(|set| set.contains(&(start, end)))
}

/// End position a partial sequence starting at `start` must reach.
///
/// # Errors
///
/// Returns [`CapError::UnsupportedCapType`] if no rule is wired for
/// `cap_type`.
pub fn determine_end_position(
    cap_type: CapType,
    start: GridPosition,
    slice_size: SliceSize,
) -> CapResult<GridPosition> {
    let rule = rule_for(cap_type).ok_or_else(|| CapError::UnsupportedCapType {
        requested: cap_type.to_string(),
        supported: CAP_RULES.iter().map(|r| r.cap_type.to_string()).collect(),
    })?;
    let (blue, red) = start.hand_locations();
    rule.transform_position(start, slice_size)
        .ok_or(CapError::UnmappedLocations { blue, red })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_set_has_one_pair_per_position() {
        for cap_type in CapType::ALL {
            for slice_size in SLICE_SIZES {
                let set = validation_set(cap_type, slice_size).unwrap();
                assert_eq!(set.len(), GridPosition::ALL.len(), "{cap_type}");
            }
        }
    }

    #[test]
    fn test_strict_rotated_halved_end_positions() {
        let end =
            determine_end_position(CapType::StrictRotated, GridPosition::Alpha1, SliceSize::Halved)
                .unwrap();
        assert_eq!(end, GridPosition::Alpha5);
        let end = determine_end_position(
            CapType::StrictRotated,
            GridPosition::Alpha1,
            SliceSize::Quartered,
        )
        .unwrap();
        assert_eq!(end, GridPosition::Alpha3);
    }

    #[test]
    fn test_halved_only_types_ignore_quartered() {
        assert_eq!(
            validation_set(CapType::StrictMirrored, SliceSize::Quartered),
            validation_set(CapType::StrictMirrored, SliceSize::Halved)
        );
    }

    #[test]
    fn test_complementary_keeps_position() {
        for position in GridPosition::ALL {
            assert!(is_valid_pair(
                CapType::StrictComplementary,
                SliceSize::Halved,
                position,
                position
            ));
        }
    }

    #[test]
    fn test_invalid_pair_rejected() {
        assert!(!is_valid_pair(
            CapType::StrictMirrored,
            SliceSize::Halved,
            GridPosition::Alpha3,
            GridPosition::Alpha3
        ));
        assert!(is_valid_pair(
            CapType::StrictMirrored,
            SliceSize::Halved,
            GridPosition::Alpha3,
            GridPosition::Alpha7
        ));
    }

    #[test]
    fn test_applying_transform_twice_closes_halved_sequences() {
        for cap_type in CapType::ALL {
            for start in GridPosition::ALL {
                let mid = determine_end_position(cap_type, start, SliceSize::Halved).unwrap();
                let end = determine_end_position(cap_type, mid, SliceSize::Halved).unwrap();
                assert_eq!(end, start, "{cap_type} from {start}");
            }
        }
    }
}
