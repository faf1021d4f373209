//! Placed widget records.

use crate::geometry::Point;
use crate::grid::{CellPosition, GridSpec, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier of a placed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A widget that has been dropped onto the grid.
///
/// `cell_indices` holds exactly `span.cell_count()` distinct indices forming
/// a contiguous block, in row-major order with the top-left cell first.
/// Only the placement store mutates these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWidget {
    pub id: WidgetId,
    /// Palette kind the widget was created from, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub span: Span,
    pub cell_indices: Vec<usize>,
    /// Container-relative offset of the widget's visual box.
    #[serde(default)]
    pub pixel_offset: Point,
    /// Set when the grid changed and `pixel_offset` has not been recomputed.
    #[serde(skip)]
    pub offset_stale: bool,
}

impl PlacedWidget {
    /// The top-left cell index, if any cells are assigned.
    pub fn first_index(&self) -> Option<usize> {
        self.cell_indices.iter().copied().min()
    }

    /// The top-left cell position under `spec`.
    pub fn start(&self, spec: &GridSpec) -> Option<CellPosition> {
        self.first_index().map(|index| spec.position_of(index))
    }

    pub fn occupies(&self, index: usize) -> bool {
        self.cell_indices.contains(&index)
    }
}
