//! Grid shape descriptors and derived cells.
//!
//! A [`GridSpec`] is the immutable (rows, columns) shape of a grid. It is
//! replaced wholesale whenever the user picks another layout size or grid
//! density and is never mutated in place. [`GridBounds`] is the on-screen
//! rectangle the grid occupies, supplied by the host layout pass.
//!
//! Cells are indexed row-major: `index = row * columns + column`.

use crate::error::GridError;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable row/column shape of a grid.
///
/// Both dimensions are at least 1; this is enforced by [`GridSpec::new`]
/// and by deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridSpec", into = "RawGridSpec")]
pub struct GridSpec {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
}

#[derive(Serialize, Deserialize)]
struct RawGridSpec {
    rows: usize,
    columns: usize,
}

impl TryFrom<RawGridSpec> for GridSpec {
    type Error = GridError;

    fn try_from(raw: RawGridSpec) -> Result<Self, Self::Error> {
        GridSpec::new(raw.rows, raw.columns)
    }
}

impl From<GridSpec> for RawGridSpec {
    fn from(spec: GridSpec) -> Self {
        RawGridSpec {
            rows: spec.rows,
            columns: spec.columns,
        }
    }
}

impl GridSpec {
    /// Creates a grid spec, rejecting zero rows or columns and shapes whose
    /// cell count does not fit in a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use widgetgrid_core::GridSpec;
    ///
    /// let spec = GridSpec::new(2, 4).unwrap();
    /// assert_eq!(spec.cell_count(), 8);
    /// assert!(GridSpec::new(0, 4).is_err());
    /// ```
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 || rows.checked_mul(columns).is_none() {
            return Err(GridError::InvalidGridSpec { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells, `rows * columns`.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Row-major index of a cell position.
    pub fn index_of(&self, position: CellPosition) -> usize {
        position.row * self.columns + position.column
    }

    /// Cell position of a row-major index.
    pub fn position_of(&self, index: usize) -> CellPosition {
        CellPosition::new(index / self.columns, index % self.columns)
    }

    /// Whether a span starting at `start` lies entirely inside the grid.
    pub fn fits(&self, start: CellPosition, span: Span) -> bool {
        start
            .row
            .checked_add(span.height())
            .is_some_and(|end| end <= self.rows)
            && start
                .column
                .checked_add(span.width())
                .is_some_and(|end| end <= self.columns)
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// A (row, column) cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

impl CellPosition {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.column)
    }
}

/// How many columns (`width`) and rows (`height`) a widget occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan", into = "RawSpan")]
pub struct Span {
    width: usize,
    height: usize,
}

#[derive(Serialize, Deserialize)]
struct RawSpan {
    width: usize,
    height: usize,
}

impl TryFrom<RawSpan> for Span {
    type Error = GridError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Span::new(raw.width, raw.height)
    }
}

impl From<Span> for RawSpan {
    fn from(span: Span) -> Self {
        RawSpan {
            width: span.width,
            height: span.height,
        }
    }
}

impl Span {
    /// Creates a span, rejecting zero width or height.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSpan { width, height });
        }
        Ok(Self { width, height })
    }

    /// A single cell.
    pub const fn unit() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells covered, `width * height`, saturating at `usize::MAX`.
    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The on-screen rectangle occupied by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub origin: Point,
    pub size: Size,
}

impl GridBounds {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// The bounds as an edge rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.rect().contains(point)
    }

    /// Pixel size of one cell of `spec` inside these bounds.
    pub fn cell_size(&self, spec: &GridSpec) -> Size {
        Size::new(
            self.size.width / spec.columns() as f64,
            self.size.height / spec.rows() as f64,
        )
    }
}

/// One derived, read-only cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub index: usize,
    pub rect: Rect,
}
