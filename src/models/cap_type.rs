//! CAP type, component set and slice size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four primitive transformations a CAP type is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapComponent {
    /// Rotation about the grid center
    Rotated,
    /// Reflection across the north-south axis
    Mirrored,
    /// Exchange of the two hands
    Swapped,
    /// Letter complementation (pro↔anti)
    Complementary,
}

impl CapComponent {
    /// All components in canonical order.
    pub const ALL: [CapComponent; 4] = [
        CapComponent::Rotated,
        CapComponent::Mirrored,
        CapComponent::Swapped,
        CapComponent::Complementary,
    ];

    /// Keyword fragment as it appears in canonical CAP type names.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            CapComponent::Rotated => "ROTATED",
            CapComponent::Mirrored => "MIRRORED",
            CapComponent::Swapped => "SWAPPED",
            CapComponent::Complementary => "COMPLEMENTARY",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            CapComponent::Rotated => 0b0001,
            CapComponent::Mirrored => 0b0010,
            CapComponent::Swapped => 0b0100,
            CapComponent::Complementary => 0b1000,
        }
    }
}

impl fmt::Display for CapComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for CapComponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        CapComponent::ALL
            .into_iter()
            .find(|component| component.keyword() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown CAP component '{s}'. Must be one of: rotated, mirrored, swapped, complementary"
                )
            })
    }
}

/// Set of CAP components, the representation between UI toggles and [`CapType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComponentSet {
    bits: u8,
}

impl ComponentSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Builds a set from a list of components.
    #[must_use]
    pub fn from_components(components: &[CapComponent]) -> Self {
        components.iter().copied().collect()
    }

    /// Returns a copy with `component` added.
    #[must_use]
    pub const fn with(self, component: CapComponent) -> Self {
        Self {
            bits: self.bits | component.bit(),
        }
    }

    /// Adds a component.
    pub fn insert(&mut self, component: CapComponent) {
        self.bits |= component.bit();
    }

    /// Membership test.
    #[must_use]
    pub const fn contains(self, component: CapComponent) -> bool {
        self.bits & component.bit() != 0
    }

    /// Number of components.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when no component is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Components in canonical order.
    pub fn iter(self) -> impl Iterator<Item = CapComponent> {
        CapComponent::ALL
            .into_iter()
            .filter(move |component| self.contains(*component))
    }
}

impl FromIterator<CapComponent> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = CapComponent>>(iter: I) -> Self {
        let mut set = ComponentSet::empty();
        for component in iter {
            set.insert(component);
        }
        set
    }
}

impl fmt::Display for ComponentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(CapComponent::keyword).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Canonical Circular Arrangement Pattern type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CapType {
    /// Second half rotated about the grid center
    #[default]
    StrictRotated,
    /// Second half mirrored across the north-south axis
    StrictMirrored,
    /// Second half performed with hands exchanged
    StrictSwapped,
    /// Second half uses complementary letters
    StrictComplementary,
    /// Mirrored and swapped
    MirroredSwapped,
    /// Swapped and complementary
    SwappedComplementary,
    /// Rotated and complementary
    RotatedComplementary,
    /// Mirrored and complementary
    MirroredComplementary,
    /// Rotated and swapped
    RotatedSwapped,
    /// Mirrored and rotated
    MirroredRotated,
    /// Mirrored, complementary and rotated
    MirroredComplementaryRotated,
}

impl CapType {
    /// Every CAP type in canonical order.
    pub const ALL: [CapType; 11] = [
        CapType::StrictRotated,
        CapType::StrictMirrored,
        CapType::StrictSwapped,
        CapType::StrictComplementary,
        CapType::MirroredSwapped,
        CapType::SwappedComplementary,
        CapType::RotatedComplementary,
        CapType::MirroredComplementary,
        CapType::RotatedSwapped,
        CapType::MirroredRotated,
        CapType::MirroredComplementaryRotated,
    ];

    /// Canonical SCREAMING_SNAKE name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CapType::StrictRotated => "STRICT_ROTATED",
            CapType::StrictMirrored => "STRICT_MIRRORED",
            CapType::StrictSwapped => "STRICT_SWAPPED",
            CapType::StrictComplementary => "STRICT_COMPLEMENTARY",
            CapType::MirroredSwapped => "MIRRORED_SWAPPED",
            CapType::SwappedComplementary => "SWAPPED_COMPLEMENTARY",
            CapType::RotatedComplementary => "ROTATED_COMPLEMENTARY",
            CapType::MirroredComplementary => "MIRRORED_COMPLEMENTARY",
            CapType::RotatedSwapped => "ROTATED_SWAPPED",
            CapType::MirroredRotated => "MIRRORED_ROTATED",
            CapType::MirroredComplementaryRotated => "MIRRORED_COMPLEMENTARY_ROTATED",
        }
    }

    /// Hyphenated lowercase tag, e.g. `strict-rotated`.
    #[must_use]
    pub fn hyphenated(self) -> String {
        self.as_str().to_ascii_lowercase().replace('_', "-")
    }
}

impl fmt::Display for CapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapType {
    type Err = String;

    /// Accepts the canonical name or its hyphenated lowercase form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().to_ascii_uppercase().replace('-', "_");
        CapType::ALL
            .into_iter()
            .find(|cap_type| cap_type.as_str() == canonical)
            .ok_or_else(|| format!("Unknown CAP type '{s}'"))
    }
}

/// How many repetitions close the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SliceSize {
    /// Output is twice the partial input
    #[default]
    Halved,
    /// Output is four times the partial input
    Quartered,
}

impl SliceSize {
    /// Number of slices the finished sequence is made of.
    #[must_use]
    pub const fn slices(self) -> usize {
        match self {
            SliceSize::Halved => 2,
            SliceSize::Quartered => 4,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SliceSize::Halved => "halved",
            SliceSize::Quartered => "quartered",
        }
    }
}

impl fmt::Display for SliceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SliceSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "halved" | "half" => Ok(SliceSize::Halved),
            "quartered" | "quarter" => Ok(SliceSize::Quartered),
            other => Err(format!(
                "Unknown slice size '{other}'. Must be 'halved' or 'quartered'"
            )),
        }
    }
}
