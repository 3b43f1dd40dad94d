//! Static transformation tables.
//!
//! One table per transformation kind per grid mode. Position tables were
//! derived by applying the location transform to both hands of each
//! position; the tests below keep the two in agreement.

use crate::models::{GridMode, GridPosition, Location};

use GridPosition::{
    Alpha1, Alpha2, Alpha3, Alpha4, Alpha5, Alpha6, Alpha7, Alpha8, Beta1, Beta2, Beta3, Beta4,
    Beta5, Beta6, Beta7, Beta8, Gamma1, Gamma10, Gamma11, Gamma12, Gamma13, Gamma14, Gamma15,
    Gamma16, Gamma2, Gamma3, Gamma4, Gamma5, Gamma6, Gamma7, Gamma8, Gamma9,
};

/// Lookup tables for one grid mode.
#[derive(Debug)]
pub struct TransformationTables {
    /// Grid mode the tables cover
    pub grid_mode: GridMode,
    /// Location reflection across the north-south axis
    pub location_mirror: [(Location, Location); 4],
    /// Location advanced one clockwise step
    pub location_rotate: [(Location, Location); 4],
    /// Position reflection across the north-south axis
    pub position_mirror: [(GridPosition, GridPosition); 16],
    /// Position with hands exchanged
    pub position_swap: [(GridPosition, GridPosition); 16],
    /// Position advanced one clockwise step
    pub position_rotate: [(GridPosition, GridPosition); 16],
}

/// Diamond grid (n/e/s/w).
pub const DIAMOND: TransformationTables = TransformationTables {
    grid_mode: GridMode::Diamond,
    location_mirror: [
        (Location::N, Location::N),
        (Location::E, Location::W),
        (Location::S, Location::S),
        (Location::W, Location::E),
    ],
    location_rotate: [
        (Location::N, Location::E),
        (Location::E, Location::S),
        (Location::S, Location::W),
        (Location::W, Location::N),
    ],
    position_mirror: [
        (Alpha1, Alpha1),
        (Alpha3, Alpha7),
        (Alpha5, Alpha5),
        (Alpha7, Alpha3),
        (Beta1, Beta1),
        (Beta3, Beta7),
        (Beta5, Beta5),
        (Beta7, Beta3),
        (Gamma1, Gamma9),
        (Gamma3, Gamma15),
        (Gamma5, Gamma13),
        (Gamma7, Gamma11),
        (Gamma9, Gamma1),
        (Gamma11, Gamma7),
        (Gamma13, Gamma5),
        (Gamma15, Gamma3),
    ],
    position_swap: [
        (Alpha1, Alpha5),
        (Alpha3, Alpha7),
        (Alpha5, Alpha1),
        (Alpha7, Alpha3),
        (Beta1, Beta1),
        (Beta3, Beta3),
        (Beta5, Beta5),
        (Beta7, Beta7),
        (Gamma1, Gamma15),
        (Gamma3, Gamma9),
        (Gamma5, Gamma11),
        (Gamma7, Gamma13),
        (Gamma9, Gamma3),
        (Gamma11, Gamma5),
        (Gamma13, Gamma7),
        (Gamma15, Gamma1),
    ],
    position_rotate: [
        (Alpha1, Alpha3),
        (Alpha3, Alpha5),
        (Alpha5, Alpha7),
        (Alpha7, Alpha1),
        (Beta1, Beta3),
        (Beta3, Beta5),
        (Beta5, Beta7),
        (Beta7, Beta1),
        (Gamma1, Gamma3),
        (Gamma3, Gamma5),
        (Gamma5, Gamma7),
        (Gamma7, Gamma1),
        (Gamma9, Gamma11),
        (Gamma11, Gamma13),
        (Gamma13, Gamma15),
        (Gamma15, Gamma9),
    ],
};

/// Box grid (ne/se/sw/nw).
pub const BOX: TransformationTables = TransformationTables {
    grid_mode: GridMode::Box,
    location_mirror: [
        (Location::Ne, Location::Nw),
        (Location::Se, Location::Sw),
        (Location::Sw, Location::Se),
        (Location::Nw, Location::Ne),
    ],
    location_rotate: [
        (Location::Ne, Location::Se),
        (Location::Se, Location::Sw),
        (Location::Sw, Location::Nw),
        (Location::Nw, Location::Ne),
    ],
    position_mirror: [
        (Alpha2, Alpha8),
        (Alpha4, Alpha6),
        (Alpha6, Alpha4),
        (Alpha8, Alpha2),
        (Beta2, Beta8),
        (Beta4, Beta6),
        (Beta6, Beta4),
        (Beta8, Beta2),
        (Gamma2, Gamma16),
        (Gamma4, Gamma14),
        (Gamma6, Gamma12),
        (Gamma8, Gamma10),
        (Gamma10, Gamma8),
        (Gamma12, Gamma6),
        (Gamma14, Gamma4),
        (Gamma16, Gamma2),
    ],
    position_swap: [
        (Alpha2, Alpha6),
        (Alpha4, Alpha8),
        (Alpha6, Alpha2),
        (Alpha8, Alpha4),
        (Beta2, Beta2),
        (Beta4, Beta4),
        (Beta6, Beta6),
        (Beta8, Beta8),
        (Gamma2, Gamma16),
        (Gamma4, Gamma10),
        (Gamma6, Gamma12),
        (Gamma8, Gamma14),
        (Gamma10, Gamma4),
        (Gamma12, Gamma6),
        (Gamma14, Gamma8),
        (Gamma16, Gamma2),
    ],
    position_rotate: [
        (Alpha2, Alpha4),
        (Alpha4, Alpha6),
        (Alpha6, Alpha8),
        (Alpha8, Alpha2),
        (Beta2, Beta4),
        (Beta4, Beta6),
        (Beta6, Beta8),
        (Beta8, Beta2),
        (Gamma2, Gamma4),
        (Gamma4, Gamma6),
        (Gamma6, Gamma8),
        (Gamma8, Gamma2),
        (Gamma10, Gamma12),
        (Gamma12, Gamma14),
        (Gamma14, Gamma16),
        (Gamma16, Gamma10),
    ],
};

/// Tables for a grid mode.
#[must_use]
pub const fn tables_for(grid_mode: GridMode) -> &'static TransformationTables {
    match grid_mode {
        GridMode::Diamond => &DIAMOND,
        GridMode::Box => &BOX,
    }
}

fn lookup<T: Copy + PartialEq>(table: &[(T, T)], key: T) -> Option<T> {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

/// Location reflected across the north-south axis.
#[must_use]
pub fn mirror_location(location: Location) -> Option<Location> {
    lookup(&tables_for(location.grid_mode()).location_mirror, location)
}

/// Location advanced `steps` clockwise quarter turns.
#[must_use]
pub fn rotate_location(location: Location, steps: usize) -> Option<Location> {
    let table = &tables_for(location.grid_mode()).location_rotate;
    (0..steps).try_fold(location, |current, _| lookup(table, current))
}

/// Position reflected across the north-south axis.
#[must_use]
pub fn mirror_position(position: GridPosition) -> Option<GridPosition> {
    lookup(&tables_for(position.grid_mode()).position_mirror, position)
}

/// Position with the hands exchanged.
#[must_use]
pub fn swap_position(position: GridPosition) -> Option<GridPosition> {
    lookup(&tables_for(position.grid_mode()).position_swap, position)
}

/// Position advanced `steps` clockwise quarter turns.
#[must_use]
pub fn rotate_position(position: GridPosition, steps: usize) -> Option<GridPosition> {
    let table = &tables_for(position.grid_mode()).position_rotate;
    (0..steps).try_fold(position, |current, _| lookup(table, current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridMode;

    fn position_from(blue: Location, red: Location) -> GridPosition {
        GridPosition::ALL
            .into_iter()
            .find(|p| p.hand_locations() == (blue, red))
            .unwrap()
    }

    #[test]
    fn test_tables_cover_every_position_once() {
        for mode in GridMode::ALL {
            let tables = tables_for(mode);
            assert_eq!(tables.grid_mode, mode);
            for table in [
                &tables.position_mirror,
                &tables.position_swap,
                &tables.position_rotate,
            ] {
                let mut froms: Vec<_> = table.iter().map(|(from, _)| *from).collect();
                let mut tos: Vec<_> = table.iter().map(|(_, to)| *to).collect();
                froms.sort();
                tos.sort();
                let mut expected: Vec<_> = GridPosition::in_grid_mode(mode).collect();
                expected.sort();
                assert_eq!(froms, expected);
                assert_eq!(tos, expected, "table must be a permutation");
            }
        }
    }

    #[test]
    fn test_position_tables_agree_with_location_tables() {
        for position in GridPosition::ALL {
            let (blue, red) = position.hand_locations();

            let mirrored = position_from(
                mirror_location(blue).unwrap(),
                mirror_location(red).unwrap(),
            );
            assert_eq!(mirror_position(position), Some(mirrored), "{position}");

            let rotated = position_from(
                rotate_location(blue, 1).unwrap(),
                rotate_location(red, 1).unwrap(),
            );
            assert_eq!(rotate_position(position, 1), Some(rotated), "{position}");

            assert_eq!(
                swap_position(position),
                Some(position_from(red, blue)),
                "{position}"
            );
        }
    }

    #[test]
    fn test_mirror_and_swap_are_involutions() {
        for position in GridPosition::ALL {
            let mirrored = mirror_position(position).unwrap();
            assert_eq!(mirror_position(mirrored), Some(position));
            let swapped = swap_position(position).unwrap();
            assert_eq!(swap_position(swapped), Some(position));
        }
    }

    #[test]
    fn test_four_rotations_return_home() {
        for position in GridPosition::ALL {
            assert_eq!(rotate_position(position, 4), Some(position));
            assert_ne!(rotate_position(position, 2), Some(position));
        }
        assert_eq!(rotate_location(Location::N, 2), Some(Location::S));
        assert_eq!(rotate_location(Location::Nw, 1), Some(Location::Ne));
    }

    #[test]
    fn test_vertical_mirror_examples() {
        assert_eq!(mirror_location(Location::E), Some(Location::W));
        assert_eq!(mirror_location(Location::N), Some(Location::N));
        assert_eq!(mirror_location(Location::Ne), Some(Location::Nw));
        assert_eq!(mirror_location(Location::Sw), Some(Location::Se));
        assert_eq!(mirror_position(GridPosition::Alpha3), Some(GridPosition::Alpha7));
    }
}
