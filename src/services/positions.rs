//! Grid position derivation from hand locations.

use crate::cap::tables::rotate_location;
use crate::models::{GridPosition, Location, RotationDirection};

/// Grid position for a (blue, red) hand location pair.
///
/// Returns `None` when the locations come from different grid modes.
///
/// # Examples
///
/// - `(s, n)` → `alpha1`
/// - `(ne, ne)` → `beta2`
/// - `(n, ne)` → `None`
#[must_use]
pub fn derive_position(blue: Location, red: Location) -> Option<GridPosition> {
    GridPosition::ALL
        .into_iter()
        .find(|position| position.hand_locations() == (blue, red))
}

/// Direction a hand travels around the grid between two locations.
///
/// `None` when the hand stays put or moves to the opposite point.
#[must_use]
pub fn travel_direction(start: Location, end: Location) -> Option<RotationDirection> {
    if rotate_location(start, 1) == Some(end) {
        Some(RotationDirection::Clockwise)
    } else if rotate_location(end, 1) == Some(start) {
        Some(RotationDirection::CounterClockwise)
    } else {
        None
    }
}

/// Location one step from `start` in `direction`.
#[must_use]
pub fn step_location(start: Location, direction: RotationDirection) -> Option<Location> {
    match direction {
        RotationDirection::Clockwise => rotate_location(start, 1),
        RotationDirection::CounterClockwise => rotate_location(start, 3),
        RotationDirection::NoRotation => Some(start),
    }
}

/// Location across the grid center from `start`.
#[must_use]
pub fn opposite_location(start: Location) -> Option<Location> {
    rotate_location(start, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_position_covers_every_pair() {
        for position in GridPosition::ALL {
            let (blue, red) = position.hand_locations();
            assert_eq!(derive_position(blue, red), Some(position));
        }
        assert_eq!(
            derive_position(Location::S, Location::N),
            Some(GridPosition::Alpha1)
        );
        assert_eq!(derive_position(Location::N, Location::Ne), None);
    }

    #[test]
    fn test_travel_direction() {
        assert_eq!(
            travel_direction(Location::N, Location::E),
            Some(RotationDirection::Clockwise)
        );
        assert_eq!(
            travel_direction(Location::Ne, Location::Nw),
            Some(RotationDirection::CounterClockwise)
        );
        assert_eq!(travel_direction(Location::N, Location::S), None);
        assert_eq!(travel_direction(Location::W, Location::W), None);
    }

    #[test]
    fn test_step_and_opposite() {
        assert_eq!(
            step_location(Location::N, RotationDirection::CounterClockwise),
            Some(Location::W)
        );
        assert_eq!(opposite_location(Location::Se), Some(Location::Nw));
    }
}
