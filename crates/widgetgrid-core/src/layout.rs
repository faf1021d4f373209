//! Layout size presets and grid density.
//!
//! A home-screen widget canvas comes in a handful of layout sizes, each with
//! a base cell grid. The grid density multiplies both dimensions so the user
//! can trade cell size for placement precision. Every (size, density) pair
//! maps to exactly one [`GridSpec`].

use crate::grid::GridSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout size of the canvas being edited.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayoutSize {
    /// 2 rows x 2 columns
    Small,
    /// 2 rows x 4 columns
    #[default]
    Medium,
    /// 4 rows x 4 columns
    Large,
    /// 4 rows x 8 columns
    ExtraLarge,
}

impl LayoutSize {
    pub const ALL: [LayoutSize; 4] = [
        LayoutSize::Small,
        LayoutSize::Medium,
        LayoutSize::Large,
        LayoutSize::ExtraLarge,
    ];

    /// Base (rows, columns) before the density multiplier.
    pub fn base_cells(&self) -> (usize, usize) {
        match self {
            LayoutSize::Small => (2, 2),
            LayoutSize::Medium => (2, 4),
            LayoutSize::Large => (4, 4),
            LayoutSize::ExtraLarge => (4, 8),
        }
    }
}

impl fmt::Display for LayoutSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Medium => write!(f, "medium"),
            Self::Large => write!(f, "large"),
            Self::ExtraLarge => write!(f, "extra_large"),
        }
    }
}

/// Multiplier applied to both grid dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridDensity {
    #[default]
    Standard,
    Dense,
    Fine,
}

impl GridDensity {
    pub fn multiplier(&self) -> usize {
        match self {
            GridDensity::Standard => 1,
            GridDensity::Dense => 2,
            GridDensity::Fine => 3,
        }
    }
}

impl fmt::Display for GridDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Dense => write!(f, "dense"),
            Self::Fine => write!(f, "fine"),
        }
    }
}

impl GridSpec {
    /// The grid for a layout size at a given density.
    ///
    /// ```
    /// use widgetgrid_core::{GridDensity, GridSpec, LayoutSize};
    ///
    /// let spec = GridSpec::for_layout(LayoutSize::Medium, GridDensity::Dense);
    /// assert_eq!((spec.rows(), spec.columns()), (4, 8));
    /// ```
    pub fn for_layout(size: LayoutSize, density: GridDensity) -> GridSpec {
        let (rows, columns) = size.base_cells();
        let m = density.multiplier();
        // Presets are all non-zero, so this cannot fail.
        GridSpec {
            rows: rows * m,
            columns: columns * m,
        }
    }
}
