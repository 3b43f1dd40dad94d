//! Letter lookup: complementary letters and coarse classification.

use crate::models::{Beat, MotionType, PositionGroup};
use crate::services::positions::travel_direction;

/// Complementary pairs; each maps to the other.
const COMPLEMENTARY_PAIRS: [(&str, &str); 16] = [
    ("A", "B"),
    ("D", "E"),
    ("G", "H"),
    ("J", "K"),
    ("M", "N"),
    ("P", "Q"),
    ("S", "T"),
    ("U", "V"),
    ("W", "X"),
    ("Y", "Z"),
    ("Σ", "Δ"),
    ("θ", "Ω"),
    ("W-", "X-"),
    ("Y-", "Z-"),
    ("Σ-", "Δ-"),
    ("θ-", "Ω-"),
];

/// Complementary letter; self-complementary and unknown letters map to
/// themselves.
///
/// # Examples
///
/// ```
/// use flowseq::services::letters::complementary_letter;
///
/// assert_eq!(complementary_letter("A"), "B");
/// assert_eq!(complementary_letter("Δ-"), "Σ-");
/// assert_eq!(complementary_letter("C"), "C");
/// ```
#[must_use]
pub fn complementary_letter(letter: &str) -> String {
    COMPLEMENTARY_PAIRS
        .iter()
        .find_map(|(a, b)| {
            if *a == letter {
                Some(*b)
            } else if *b == letter {
                Some(*a)
            } else {
                None
            }
        })
        .unwrap_or(letter)
        .to_string()
}

/// Letter for a generated beat, from its position groups and motion types.
///
/// Coarse: it separates the letter families the generator can produce but
/// does not resolve every pictograph distinction. `None` when a hand has no
/// motion.
#[must_use]
pub fn classify_letter(beat: &Beat) -> Option<&'static str> {
    let blue = beat.blue_motion.as_ref()?;
    let red = beat.red_motion.as_ref()?;
    let start = beat.start_position.group();
    let end = beat.end_position.group();

    let letter = match (blue.motion_type, red.motion_type) {
        (b, r) if b.is_shift() && r.is_shift() => {
            let family = match (start, end) {
                (PositionGroup::Alpha, PositionGroup::Alpha) => ["A", "B", "C"],
                (PositionGroup::Beta, PositionGroup::Alpha) => ["D", "E", "F"],
                (PositionGroup::Beta, PositionGroup::Beta) => ["G", "H", "I"],
                (PositionGroup::Alpha, PositionGroup::Beta) => ["J", "K", "L"],
                (PositionGroup::Gamma, PositionGroup::Gamma) => {
                    return Some(classify_gamma_shift(beat, b, r));
                }
                _ => return None,
            };
            pick(family, b, r)
        }
        (shift, MotionType::Static) | (MotionType::Static, shift) if shift.is_shift() => {
            if shift == MotionType::Pro {
                "W"
            } else {
                "X"
            }
        }
        (shift, MotionType::Dash) | (MotionType::Dash, shift) if shift.is_shift() => {
            if shift == MotionType::Pro {
                "Y"
            } else {
                "Z"
            }
        }
        (MotionType::Dash, MotionType::Dash) => "Φ",
        (MotionType::Dash, MotionType::Static) | (MotionType::Static, MotionType::Dash) => "Λ",
        _ => match end {
            PositionGroup::Alpha => "α",
            PositionGroup::Beta => "β",
            PositionGroup::Gamma => "Γ",
        },
    };
    Some(letter)
}

fn pick(family: [&'static str; 3], blue: MotionType, red: MotionType) -> &'static str {
    match (blue, red) {
        (MotionType::Pro, MotionType::Pro) => family[0],
        (MotionType::Anti, MotionType::Anti) => family[1],
        _ => family[2],
    }
}

fn classify_gamma_shift(beat: &Beat, blue_type: MotionType, red_type: MotionType) -> &'static str {
    let (blue_start, red_start) = beat.start_position.hand_locations();
    let (blue_end, red_end) = beat.end_position.hand_locations();
    let blue_travel = travel_direction(blue_start, blue_end);
    let red_travel = travel_direction(red_start, red_end);

    if blue_travel == red_travel {
        return pick(["M", "N", "O"], blue_type, red_type);
    }
    if blue_end == red_start && red_end == blue_start {
        return pick(["P", "Q", "R"], blue_type, red_type);
    }
    match (blue_type, red_type) {
        (MotionType::Pro, MotionType::Pro) => "S",
        (MotionType::Anti, MotionType::Anti) => "T",
        (MotionType::Pro, _) => "U",
        _ => "V",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GridPosition, MotionData, RotationDirection};

    fn beat(
        start: GridPosition,
        end: GridPosition,
        blue: (MotionType, RotationDirection),
        red: (MotionType, RotationDirection),
    ) -> Beat {
        let (bs, rs) = start.hand_locations();
        let (be, re) = end.hand_locations();
        Beat::new(
            1,
            start,
            end,
            MotionData::new(blue.0, blue.1, bs, be),
            MotionData::new(red.0, red.1, rs, re),
        )
    }

    const PRO_CW: (MotionType, RotationDirection) = (MotionType::Pro, RotationDirection::Clockwise);
    const ANTI_CW: (MotionType, RotationDirection) =
        (MotionType::Anti, RotationDirection::Clockwise);
    const STATIC: (MotionType, RotationDirection) =
        (MotionType::Static, RotationDirection::NoRotation);
    const DASH: (MotionType, RotationDirection) = (MotionType::Dash, RotationDirection::NoRotation);

    #[test]
    fn test_complementary_pairs_are_symmetric() {
        for (a, b) in COMPLEMENTARY_PAIRS {
            assert_eq!(complementary_letter(a), b);
            assert_eq!(complementary_letter(b), a);
        }
    }

    #[test]
    fn test_self_complementary_and_unknown() {
        let self_complementary = [
            "C", "F", "I", "L", "O", "R", "Φ", "Ψ", "Λ", "α", "β", "Γ", "Φ-", "Λ-",
        ];
        for letter in self_complementary {
            assert_eq!(complementary_letter(letter), letter);
        }
        assert_eq!(complementary_letter("?"), "?");
    }

    #[test]
    fn test_classify_alpha_to_alpha() {
        let b = beat(GridPosition::Alpha1, GridPosition::Alpha3, PRO_CW, PRO_CW);
        assert_eq!(classify_letter(&b), Some("A"));
        let b = beat(GridPosition::Alpha1, GridPosition::Alpha3, ANTI_CW, ANTI_CW);
        assert_eq!(classify_letter(&b), Some("B"));
        let b = beat(GridPosition::Alpha1, GridPosition::Alpha3, PRO_CW, ANTI_CW);
        assert_eq!(classify_letter(&b), Some("C"));
    }

    #[test]
    fn test_classify_gamma_families() {
        // both hands travel clockwise
        let b = beat(GridPosition::Gamma1, GridPosition::Gamma3, PRO_CW, PRO_CW);
        assert_eq!(classify_letter(&b), Some("M"));
        // hands exchange places
        let b = beat(GridPosition::Gamma1, GridPosition::Gamma15, PRO_CW, PRO_CW);
        assert_eq!(classify_letter(&b), Some("P"));
        // hands travel apart
        let b = beat(GridPosition::Gamma1, GridPosition::Gamma11, ANTI_CW, PRO_CW);
        assert_eq!(classify_letter(&b), Some("V"));
    }

    #[test]
    fn test_classify_mixed_motions() {
        let b = beat(GridPosition::Alpha1, GridPosition::Gamma1, STATIC, ANTI_CW);
        assert_eq!(classify_letter(&b), Some("X"));
        let b = beat(GridPosition::Alpha1, GridPosition::Gamma15, DASH, PRO_CW);
        assert_eq!(classify_letter(&b), Some("Y"));
        let b = beat(GridPosition::Alpha1, GridPosition::Alpha5, DASH, DASH);
        assert_eq!(classify_letter(&b), Some("Φ"));
        let b = beat(GridPosition::Alpha1, GridPosition::Beta1, DASH, STATIC);
        assert_eq!(classify_letter(&b), Some("Λ"));
        let b = beat(GridPosition::Beta5, GridPosition::Beta5, STATIC, STATIC);
        assert_eq!(classify_letter(&b), Some("β"));
    }
}
