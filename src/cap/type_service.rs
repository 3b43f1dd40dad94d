//! Mapping between component sets and canonical CAP types.

use crate::models::{CapComponent, CapType, ComponentSet};

use CapComponent::{Complementary, Mirrored, Rotated, Swapped};

/// Implemented combinations and the CAP type each maps to.
const COMBINATIONS: [(&[CapComponent], CapType); 11] = [
    (&[Rotated], CapType::StrictRotated),
    (&[Mirrored], CapType::StrictMirrored),
    (&[Swapped], CapType::StrictSwapped),
    (&[Complementary], CapType::StrictComplementary),
    (&[Mirrored, Swapped], CapType::MirroredSwapped),
    (&[Swapped, Complementary], CapType::SwappedComplementary),
    (&[Rotated, Complementary], CapType::RotatedComplementary),
    (&[Mirrored, Complementary], CapType::MirroredComplementary),
    (&[Rotated, Swapped], CapType::RotatedSwapped),
    (&[Mirrored, Rotated], CapType::MirroredRotated),
    (&[Mirrored, Complementary, Rotated], CapType::MirroredComplementaryRotated),
];

const DISPLAY_COLLAPSE_LENGTH: usize = 20;

/// Service for converting between CAP types and their components.
pub struct CapTypeService;

impl CapTypeService {
    /// Decomposes a CAP type into the components its name contains.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowseq::cap::CapTypeService;
    /// use flowseq::models::{CapComponent, CapType};
    ///
    /// let set = CapTypeService::parse_components(CapType::RotatedSwapped);
    /// assert!(set.contains(CapComponent::Rotated));
    /// assert!(set.contains(CapComponent::Swapped));
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn parse_components(cap_type: CapType) -> ComponentSet {
        let name = cap_type.as_str();
        CapComponent::ALL
            .into_iter()
            .filter(|component| name.contains(component.keyword()))
            .collect()
    }

    /// True when a CAP type exists for the component set.
    ///
    /// The empty set counts as implemented; it maps to the default type.
    #[must_use]
    pub fn is_implemented(components: ComponentSet) -> bool {
        components.is_empty() || Self::lookup(components).is_some()
    }

    /// Maps a component set to its CAP type.
    ///
    /// Empty or unimplemented sets fall back to
    /// [`CapType::StrictRotated`]. The fallback is not a validity signal;
    /// check [`Self::is_implemented`] first when it matters.
    #[must_use]
    pub fn generate_cap_type(components: ComponentSet) -> CapType {
        Self::lookup(components).unwrap_or_else(|| {
            tracing::debug!(
                "No CAP type for components {}, falling back to {}",
                components,
                CapType::StrictRotated
            );
            CapType::StrictRotated
        })
    }

    /// Human-readable name, collapsed when long.
    ///
    /// `STRICT_MIRRORED` becomes `Strict Mirrored`;
    /// `MIRRORED_COMPLEMENTARY_ROTATED` becomes `Mirrored + 2 more`.
    #[must_use]
    pub fn format_for_display(cap_type: CapType) -> String {
        let words: Vec<String> = cap_type
            .as_str()
            .split('_')
            .map(title_case)
            .collect();
        let joined = words.join(" ");
        if joined.len() > DISPLAY_COLLAPSE_LENGTH && words.len() > 2 {
            format!("{} + {} more", words[0], words.len() - 1)
        } else {
            joined
        }
    }

    /// Every CAP type in canonical order.
    #[must_use]
    pub fn all_cap_types() -> &'static [CapType] {
        &CapType::ALL
    }

    fn lookup(components: ComponentSet) -> Option<CapType> {
        COMBINATIONS
            .iter()
            .find(|(parts, _)| ComponentSet::from_components(parts) == components)
            .map(|(_, cap_type)| *cap_type)
    }
}

fn title_case(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
