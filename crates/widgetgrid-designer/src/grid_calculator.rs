//! Grid calculator: pure functions between pixel space and grid cells.
//!
//! Every function here is stateless and deterministic. The drag preview and
//! the drop commit call the same functions with the same inputs, which is
//! what keeps the highlighted cells and the committed cells identical.
//!
//! "No valid placement" is answered with `None` or an empty index list,
//! never with an error.

use widgetgrid_core::{CellPosition, GridBounds, GridCell, GridSpec, Point, Rect, Size, Span};

/// Pixel coordinate of grid line `i` out of `n` along one axis.
///
/// The last line is pinned to `origin + extent` so the cells tile the
/// bounds exactly, and neighbouring cells share the same edge value.
fn grid_line(origin: f64, extent: f64, i: usize, n: usize) -> f64 {
    if i >= n {
        origin + extent
    } else {
        origin + extent * i as f64 / n as f64
    }
}

/// Pixel rectangle covered by `span` starting at `start`.
///
/// The caller is expected to pass a start that fits; out-of-grid spans are
/// clamped to the grid edge.
pub fn span_rect(start: CellPosition, span: Span, spec: &GridSpec, bounds: &GridBounds) -> Rect {
    let (rows, columns) = (spec.rows(), spec.columns());
    Rect::new(
        grid_line(bounds.origin.x, bounds.size.width, start.column, columns),
        grid_line(bounds.origin.y, bounds.size.height, start.row, rows),
        grid_line(
            bounds.origin.x,
            bounds.size.width,
            start.column + span.width(),
            columns,
        ),
        grid_line(
            bounds.origin.y,
            bounds.size.height,
            start.row + span.height(),
            rows,
        ),
    )
}

/// Divides `bounds` into `rows * columns` cells, enumerated row-major.
///
/// # Examples
///
/// ```
/// use widgetgrid_core::{GridBounds, GridSpec, Point, Rect, Size};
/// use widgetgrid_designer::grid_calculator::cells;
///
/// let spec = GridSpec::new(2, 4).unwrap();
/// let bounds = GridBounds::new(Point::zero(), Size::new(400.0, 200.0));
/// let cells = cells(&spec, &bounds);
/// assert_eq!(cells.len(), 8);
/// assert_eq!(cells[5].rect, Rect::new(100.0, 100.0, 200.0, 200.0));
/// ```
pub fn cells(spec: &GridSpec, bounds: &GridBounds) -> Vec<GridCell> {
    let mut out = Vec::with_capacity(spec.cell_count());
    for row in 0..spec.rows() {
        for column in 0..spec.columns() {
            let start = CellPosition::new(row, column);
            out.push(GridCell {
                index: spec.index_of(start),
                rect: span_rect(start, Span::unit(), spec, bounds),
            });
        }
    }
    out
}

/// The first cell (row-major) whose closed rectangle contains `point`.
pub fn touched_cell<'a>(point: &Point, cells: &'a [GridCell]) -> Option<&'a GridCell> {
    cells.iter().find(|cell| cell.rect.contains(point))
}

/// Picks the top-left cell for a span dragged to `point`.
///
/// Every start position whose span would cover the touched cell is a
/// candidate; candidates that run off the grid are skipped, and a span
/// larger than the grid has none. The candidate whose span centroid is
/// nearest to `point` wins, and ties go to the earliest candidate in
/// enumeration order (row offset outer, column offset inner), so the touched
/// cell itself is preferred when equidistant.
pub fn best_position(
    point: &Point,
    span: Span,
    cells: &[GridCell],
    spec: &GridSpec,
    bounds: &GridBounds,
) -> Option<CellPosition> {
    if span.height() > spec.rows() || span.width() > spec.columns() {
        return None;
    }
    let touched = spec.position_of(touched_cell(point, cells)?.index);

    let mut best: Option<(CellPosition, f64)> = None;
    for row_offset in 0..=touched.row.min(span.height() - 1) {
        for column_offset in 0..=touched.column.min(span.width() - 1) {
            let start = CellPosition::new(touched.row - row_offset, touched.column - column_offset);
            if !spec.fits(start, span) {
                continue;
            }

            let distance = point.distance_to(&span_rect(start, span, spec, bounds).center());
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((start, distance));
            }
        }
    }

    best.map(|(start, _)| start)
}

/// Row-major cell indices covered by `span` starting at `start`.
///
/// Returns an empty list when the span does not fit inside the grid.
pub fn indices(start: CellPosition, span: Span, spec: &GridSpec) -> Vec<usize> {
    if !spec.fits(start, span) {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(span.cell_count());
    for row in start.row..start.row + span.height() {
        for column in start.column..start.column + span.width() {
            out.push(spec.index_of(CellPosition::new(row, column)));
        }
    }
    out
}

/// Container-relative offset that centers a visual box of `pixel_span_size`
/// inside the span area.
///
/// `origin_correction` is the container's own screen origin.
pub fn offset(
    start: CellPosition,
    span: Span,
    pixel_span_size: Size,
    bounds: &GridBounds,
    spec: &GridSpec,
    origin_correction: Point,
) -> Point {
    let centroid = span_rect(start, span, spec, bounds).center();
    centroid - pixel_span_size.half() - origin_correction
}

/// Re-maps a widget's indices onto a grid of a different shape.
///
/// The top-left cell is scaled proportionally
/// (`new_row = row * new_rows / old_rows`, floored, likewise for columns)
/// and the indices are re-derived for the unchanged span. An empty list means
/// the widget cannot be represented in the new grid.
///
/// ```
/// use widgetgrid_core::{GridSpec, Span};
/// use widgetgrid_designer::grid_calculator::migrate;
///
/// let old = GridSpec::new(2, 4).unwrap();
/// let new = GridSpec::new(4, 4).unwrap();
/// assert_eq!(migrate(&[1], Span::unit(), &old, &new), vec![1]);
/// ```
pub fn migrate(
    old_indices: &[usize],
    span: Span,
    old_spec: &GridSpec,
    new_spec: &GridSpec,
) -> Vec<usize> {
    let Some(first) = old_indices.iter().copied().min() else {
        return Vec::new();
    };
    let old = old_spec.position_of(first);
    let scale = |value: usize, new_dim: usize, old_dim: usize| {
        value.checked_mul(new_dim).map(|scaled| scaled / old_dim)
    };
    let (Some(row), Some(column)) = (
        scale(old.row, new_spec.rows(), old_spec.rows()),
        scale(old.column, new_spec.columns(), old_spec.columns()),
    ) else {
        return Vec::new();
    };
    indices(CellPosition::new(row, column), span, new_spec)
}
