//! Grid modes, hand locations and grid positions.
//!
//! A grid position is fully determined by where the two hands are: the
//! (blue, red) location pair. Diamond positions use the cardinal points,
//! box positions the intercardinal ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass layout that locations and positions are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    /// Cardinal points (N/E/S/W)
    #[default]
    Diamond,
    /// Intercardinal points (NE/SE/SW/NW)
    Box,
}

impl GridMode {
    /// Both grid modes.
    pub const ALL: [GridMode; 2] = [GridMode::Diamond, GridMode::Box];

    /// Lowercase name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }

    /// The four hand locations of this grid mode in clockwise order.
    #[must_use]
    pub const fn locations(self) -> [Location; 4] {
        match self {
            GridMode::Diamond => [Location::N, Location::E, Location::S, Location::W],
            GridMode::Box => [Location::Ne, Location::Se, Location::Sw, Location::Nw],
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "diamond" => Ok(GridMode::Diamond),
            "box" => Ok(GridMode::Box),
            other => Err(format!(
                "Unknown grid mode '{other}'. Must be 'diamond' or 'box'"
            )),
        }
    }
}

/// Compass-style hand location on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// North
    N,
    /// East
    E,
    /// South
    S,
    /// West
    W,
    /// Northeast
    Ne,
    /// Southeast
    Se,
    /// Southwest
    Sw,
    /// Northwest
    Nw,
}

impl Location {
    /// Grid mode this location belongs to.
    #[must_use]
    pub const fn grid_mode(self) -> GridMode {
        match self {
            Location::N | Location::E | Location::S | Location::W => GridMode::Diamond,
            Location::Ne | Location::Se | Location::Sw | Location::Nw => GridMode::Box,
        }
    }

    /// Lowercase compass label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Location::N => "n",
            Location::E => "e",
            Location::S => "s",
            Location::W => "w",
            Location::Ne => "ne",
            Location::Se => "se",
            Location::Sw => "sw",
            Location::Nw => "nw",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse family a position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionGroup {
    /// Hands on opposite points
    Alpha,
    /// Hands on the same point
    Beta,
    /// Hands a quarter apart
    Gamma,
}

macro_rules! grid_positions {
    ($($variant:ident => $label:literal, $mode:ident, $group:ident, $blue:ident, $red:ident;)+) => {
        /// Named grid position: the (blue, red) hand location pair.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum GridPosition {
            $(
                #[doc = concat!("`", $label, "`")]
                $variant,
            )+
        }

        impl GridPosition {
            /// Every position of both grid modes.
            pub const ALL: [GridPosition; 32] = [$(GridPosition::$variant),+];

            /// Lowercase label such as `alpha1`.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(GridPosition::$variant => $label,)+
                }
            }

            /// Grid mode the position lives in.
            #[must_use]
            pub const fn grid_mode(self) -> GridMode {
                match self {
                    $(GridPosition::$variant => GridMode::$mode,)+
                }
            }

            /// Alpha, beta or gamma family.
            #[must_use]
            pub const fn group(self) -> PositionGroup {
                match self {
                    $(GridPosition::$variant => PositionGroup::$group,)+
                }
            }

            /// Hand locations as (blue, red).
            #[must_use]
            pub const fn hand_locations(self) -> (Location, Location) {
                match self {
                    $(GridPosition::$variant => (Location::$blue, Location::$red),)+
                }
            }
        }
    };
}

grid_positions! {
    Alpha1 => "alpha1", Diamond, Alpha, S, N;
    Alpha2 => "alpha2", Box, Alpha, Sw, Ne;
    Alpha3 => "alpha3", Diamond, Alpha, W, E;
    Alpha4 => "alpha4", Box, Alpha, Nw, Se;
    Alpha5 => "alpha5", Diamond, Alpha, N, S;
    Alpha6 => "alpha6", Box, Alpha, Ne, Sw;
    Alpha7 => "alpha7", Diamond, Alpha, E, W;
    Alpha8 => "alpha8", Box, Alpha, Se, Nw;
    Beta1 => "beta1", Diamond, Beta, N, N;
    Beta2 => "beta2", Box, Beta, Ne, Ne;
    Beta3 => "beta3", Diamond, Beta, E, E;
    Beta4 => "beta4", Box, Beta, Se, Se;
    Beta5 => "beta5", Diamond, Beta, S, S;
    Beta6 => "beta6", Box, Beta, Sw, Sw;
    Beta7 => "beta7", Diamond, Beta, W, W;
    Beta8 => "beta8", Box, Beta, Nw, Nw;
    Gamma1 => "gamma1", Diamond, Gamma, W, N;
    Gamma2 => "gamma2", Box, Gamma, Nw, Ne;
    Gamma3 => "gamma3", Diamond, Gamma, N, E;
    Gamma4 => "gamma4", Box, Gamma, Ne, Se;
    Gamma5 => "gamma5", Diamond, Gamma, E, S;
    Gamma6 => "gamma6", Box, Gamma, Se, Sw;
    Gamma7 => "gamma7", Diamond, Gamma, S, W;
    Gamma8 => "gamma8", Box, Gamma, Sw, Nw;
    Gamma9 => "gamma9", Diamond, Gamma, E, N;
    Gamma10 => "gamma10", Box, Gamma, Se, Ne;
    Gamma11 => "gamma11", Diamond, Gamma, S, E;
    Gamma12 => "gamma12", Box, Gamma, Sw, Se;
    Gamma13 => "gamma13", Diamond, Gamma, W, S;
    Gamma14 => "gamma14", Box, Gamma, Nw, Sw;
    Gamma15 => "gamma15", Diamond, Gamma, N, W;
    Gamma16 => "gamma16", Box, Gamma, Ne, Nw;
}

impl GridPosition {
    /// Positions belonging to one grid mode.
    pub fn in_grid_mode(mode: GridMode) -> impl Iterator<Item = GridPosition> {
        Self::ALL
            .into_iter()
            .filter(move |position| position.grid_mode() == mode)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == wanted)
            .ok_or_else(|| format!("Unknown grid position '{s}'"))
    }
}
