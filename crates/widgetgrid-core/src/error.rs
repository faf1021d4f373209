//! Error handling for widgetgrid
//!
//! Two kinds of failure exist in the placement engine:
//! - Grid errors: contract violations such as a zero-sized grid or span.
//!   They are raised by the validating constructors, so a value that was
//!   successfully built can never trip them later.
//! - Placement errors: the store refused to add, move or restore a widget.
//!
//! "No valid placement" while dragging is not an error at all; the
//! calculator answers with `None` or an empty index list instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::grid::{CellPosition, Span};
use crate::widget::WidgetId;
use thiserror::Error;

/// Contract violations on grid shapes and spans.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column
    #[error("Invalid grid spec {rows}x{columns}: rows and columns must be >= 1")]
    InvalidGridSpec {
        /// The requested row count.
        rows: usize,
        /// The requested column count.
        columns: usize,
    },

    /// A span needs at least one cell in each direction
    #[error("Invalid span {width}x{height}: width and height must be >= 1")]
    InvalidSpan {
        /// The requested width in cells.
        width: usize,
        /// The requested height in cells.
        height: usize,
    },
}

/// Rejections reported by the placement store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The span does not fit inside the grid at the requested start
    #[error("Span {span} at {start} does not fit in a {rows}x{columns} grid")]
    OutOfBounds {
        /// The requested top-left cell.
        start: CellPosition,
        /// The span that was being placed.
        span: Span,
        /// Rows of the current grid.
        rows: usize,
        /// Columns of the current grid.
        columns: usize,
    },

    /// At least one target cell belongs to another widget
    #[error("Cells {conflicts:?} are already occupied")]
    Occupied {
        /// The target cells that collide with other widgets.
        conflicts: Vec<usize>,
    },

    /// No widget with this id is placed
    #[error("Unknown widget {0}")]
    UnknownWidget(WidgetId),

    /// A widget with this id is already placed
    #[error("Widget {0} is already placed")]
    DuplicateWidget(WidgetId),

    /// No free position in the grid can hold the span
    #[error("No free space for a {span} widget")]
    NoSpace {
        /// The span that could not be placed.
        span: Span,
    },

    /// The palette has no widget of this kind
    #[error("Unknown widget kind '{0}'")]
    UnknownKind(String),

    /// A restored record does not describe a contiguous block of the grid
    #[error("Widget {id} has a malformed cell list: {reason}")]
    MalformedRecord {
        /// The widget whose record was rejected.
        id: WidgetId,
        /// Why the record was rejected.
        reason: String,
    },
}

/// Main error type for widgetgrid
///
/// A unified error type that can represent any engine error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid contract violation
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Placement rejection
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
