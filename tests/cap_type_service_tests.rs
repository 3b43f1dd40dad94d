//! Integration tests for CAP type resolution and validation sets.

use flowseq::cap::{determine_end_position, is_valid_pair, CapExecutorSelector, CapTypeService};
use flowseq::models::{CapComponent, CapType, ComponentSet, GridPosition, SliceSize};

#[test]
fn test_components_round_trip_for_every_type() {
    for cap_type in CapType::ALL {
        let components = CapTypeService::parse_components(cap_type);
        assert!(CapTypeService::is_implemented(components));
        assert_eq!(CapTypeService::generate_cap_type(components), cap_type);
    }
}

#[test]
fn test_unimplemented_combination_falls_back() {
    let components = ComponentSet::from_components(&[
        CapComponent::Rotated,
        CapComponent::Swapped,
        CapComponent::Complementary,
    ]);
    assert!(!CapTypeService::is_implemented(components));
    assert_eq!(
        CapTypeService::generate_cap_type(components),
        CapType::StrictRotated
    );
}

#[test]
fn test_empty_set_maps_to_default() {
    assert!(CapTypeService::is_implemented(ComponentSet::empty()));
    assert_eq!(
        CapTypeService::generate_cap_type(ComponentSet::empty()),
        CapType::StrictRotated
    );
}

#[test]
fn test_display_names() {
    assert_eq!(
        CapTypeService::format_for_display(CapType::StrictMirrored),
        "Strict Mirrored"
    );
    assert_eq!(
        CapTypeService::format_for_display(CapType::SwappedComplementary),
        "Swapped Complementary"
    );
    assert_eq!(
        CapTypeService::format_for_display(CapType::MirroredComplementaryRotated),
        "Mirrored + 2 more"
    );
}

#[test]
fn test_all_types_are_supported() {
    assert_eq!(CapExecutorSelector::supported_cap_types().len(), 11);
    for cap_type in CapTypeService::all_cap_types() {
        assert!(CapExecutorSelector::is_supported(*cap_type));
    }
}

#[test]
fn test_end_position_agrees_with_validation_set() {
    for cap_type in CapType::ALL {
        for slice_size in [SliceSize::Halved, SliceSize::Quartered] {
            for start in GridPosition::ALL {
                let end = determine_end_position(cap_type, start, slice_size).unwrap();
                assert!(
                    is_valid_pair(cap_type, slice_size, start, end),
                    "{cap_type} {slice_size}: {start} -> {end}"
                );
                assert_eq!(end.grid_mode(), start.grid_mode());
            }
        }
    }
}

#[test]
fn test_known_end_positions() {
    use GridPosition::{Alpha1, Alpha3, Alpha5, Alpha7, Beta4, Beta8, Gamma11};
    use SliceSize::{Halved, Quartered};

    let cases = [
        (CapType::StrictRotated, Halved, Alpha1, Alpha5),
        (CapType::StrictRotated, Quartered, Alpha1, Alpha3),
        (CapType::StrictMirrored, Halved, Alpha3, Alpha7),
        (CapType::StrictSwapped, Halved, Alpha1, Alpha5),
        (CapType::StrictComplementary, Halved, Gamma11, Gamma11),
        (CapType::StrictRotated, Halved, Beta4, Beta8),
    ];
    for (cap_type, slice_size, start, expected) in cases {
        assert_eq!(
            determine_end_position(cap_type, start, slice_size).unwrap(),
            expected,
            "{cap_type} {slice_size} from {start}"
        );
    }
}
