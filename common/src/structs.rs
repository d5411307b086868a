//! Basic structures such as Vec3

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

mod vec3;
pub use vec3::*;

mod line;
pub use line::WorldLine;

/// One of the three coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A half-open interval `[min, max)` applied to both X and Y
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub min: i64,
    pub max: i64,
}

impl Default for Area {
    fn default() -> Self {
        Self {
            min: crate::constants::TEST_AREA_MIN,
            max: crate::constants::TEST_AREA_MAX,
        }
    }
}

impl Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}
