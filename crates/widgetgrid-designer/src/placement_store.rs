//! Placement store: the ordered collection of placed widgets.
//!
//! The store is the sole mutator of [`PlacedWidget`] records. Geometry is
//! delegated to [`grid_calculator`](crate::grid_calculator) and conflict
//! checks to [`Occupancy`]; every successful mutation keeps the cell sets
//! of all widgets pairwise disjoint.
//!
//! Lifecycle of a record: placed by [`add`](PlacementStore::add), then any
//! number of [`move_to`](PlacementStore::move_to) and
//! [`migrate_all`](PlacementStore::migrate_all) passes, until
//! [`remove`](PlacementStore::remove) or a migration drops it.

use crate::grid_calculator;
use crate::occupancy::Occupancy;
use std::collections::BTreeSet;
use tracing::{debug, info};
use widgetgrid_core::{
    CellPosition, GridBounds, GridCell, GridSpec, PlacedWidget, PlacementError, Point, Size, Span,
    WidgetId,
};

/// Pixel adjustments applied when positioning widget visuals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelMetrics {
    /// Screen origin of the container the widgets are drawn in.
    pub origin_correction: Point,
    /// Gap between the span area and the widget's visual box, per side.
    pub cell_padding: f64,
}

/// Owns the placed widgets and the current grid.
#[derive(Debug, Clone)]
pub struct PlacementStore {
    spec: GridSpec,
    bounds: GridBounds,
    metrics: PixelMetrics,
    widgets: Vec<PlacedWidget>,
}

impl PlacementStore {
    /// Creates an empty store for the given grid.
    pub fn new(spec: GridSpec, bounds: GridBounds) -> Self {
        Self {
            spec,
            bounds,
            metrics: PixelMetrics::default(),
            widgets: Vec::new(),
        }
    }

    /// Sets the pixel metrics, builder style.
    pub fn with_metrics(mut self, metrics: PixelMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    pub fn metrics(&self) -> &PixelMetrics {
        &self.metrics
    }

    /// Replaces the pixel metrics and recomputes every offset.
    pub fn set_metrics(&mut self, metrics: PixelMetrics) {
        self.metrics = metrics;
        self.refresh_offsets();
    }

    /// Placed widgets in placement order.
    pub fn widgets(&self) -> &[PlacedWidget] {
        &self.widgets
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedWidget> {
        self.widgets.iter()
    }

    pub fn get(&self, id: WidgetId) -> Option<&PlacedWidget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Cells of the current grid.
    pub fn cells(&self) -> Vec<GridCell> {
        grid_calculator::cells(&self.spec, &self.bounds)
    }

    /// Occupied cells, optionally leaving out one widget.
    pub fn occupied(&self, excluding: Option<WidgetId>) -> Occupancy {
        Occupancy::from_widgets(&self.widgets, excluding)
    }

    /// Size of the visual box of a widget with `span` placed at `start`.
    pub fn pixel_span_size(&self, start: CellPosition, span: Span) -> Size {
        grid_calculator::span_rect(start, span, &self.spec, &self.bounds)
            .inset(self.metrics.cell_padding)
            .size()
    }

    /// Container-relative offset of a widget with `span` placed at `start`.
    pub fn pixel_offset(&self, start: CellPosition, span: Span) -> Point {
        grid_calculator::offset(
            start,
            span,
            self.pixel_span_size(start, span),
            &self.bounds,
            &self.spec,
            self.metrics.origin_correction,
        )
    }

    /// Indices for `span` at `start`, or `OutOfBounds`.
    fn target_indices(&self, start: CellPosition, span: Span) -> Result<Vec<usize>, PlacementError> {
        let indices = grid_calculator::indices(start, span, &self.spec);
        if indices.is_empty() {
            debug!("Span {} at {} is outside grid {}", span, start, self.spec);
            return Err(PlacementError::OutOfBounds {
                start,
                span,
                rows: self.spec.rows(),
                columns: self.spec.columns(),
            });
        }
        Ok(indices)
    }

    /// Places a new widget with its top-left cell at `start`.
    ///
    /// Rejected when the span runs off the grid or any target cell is
    /// occupied.
    pub fn add(
        &mut self,
        span: Span,
        start: CellPosition,
    ) -> Result<&PlacedWidget, PlacementError> {
        self.add_kind(None, span, start)
    }

    /// Same as [`add`](Self::add), recording the palette kind.
    pub fn add_kind(
        &mut self,
        kind: Option<String>,
        span: Span,
        start: CellPosition,
    ) -> Result<&PlacedWidget, PlacementError> {
        let indices = self.target_indices(start, span)?;
        let conflicts = self.occupied(None).conflicts(&indices);
        if !conflicts.is_empty() {
            debug!("Rejected add of {} at {}: cells {:?} taken", span, start, conflicts);
            return Err(PlacementError::Occupied { conflicts });
        }

        let widget = PlacedWidget {
            id: WidgetId::new(),
            kind,
            span,
            cell_indices: indices,
            pixel_offset: self.pixel_offset(start, span),
            offset_stale: false,
        };
        info!("Placed widget {} ({}) at {}", widget.id, span, start);

        let index = self.widgets.len();
        self.widgets.push(widget);
        Ok(&self.widgets[index])
    }

    /// Moves a placed widget so its top-left cell is `start`.
    ///
    /// The widget's own current cells do not block the move.
    pub fn move_to(&mut self, id: WidgetId, start: CellPosition) -> Result<(), PlacementError> {
        let position = self
            .widgets
            .iter()
            .position(|w| w.id == id)
            .ok_or(PlacementError::UnknownWidget(id))?;
        let span = self.widgets[position].span;

        let indices = self.target_indices(start, span)?;
        let conflicts = self.occupied(Some(id)).conflicts(&indices);
        if !conflicts.is_empty() {
            debug!("Rejected move of {} to {}: cells {:?} taken", id, start, conflicts);
            return Err(PlacementError::Occupied { conflicts });
        }

        let pixel_offset = self.pixel_offset(start, span);
        let widget = &mut self.widgets[position];
        widget.cell_indices = indices;
        widget.pixel_offset = pixel_offset;
        widget.offset_stale = false;
        info!("Moved widget {} to {}", id, start);
        Ok(())
    }

    /// Deletes a widget, returning its record.
    pub fn remove(&mut self, id: WidgetId) -> Option<PlacedWidget> {
        let position = self.widgets.iter().position(|w| w.id == id)?;
        info!("Removed widget {}", id);
        Some(self.widgets.remove(position))
    }

    /// Removes every widget.
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    /// Re-maps every widget onto `new_spec`.
    ///
    /// Widgets that cannot be represented in the new grid are dropped, as are
    /// widgets whose migrated cells collide with an earlier survivor (store
    /// order decides). Survivors keep their id and span; their offsets are
    /// marked stale until [`refresh_offsets`](Self::refresh_offsets) runs.
    /// Returns the ids of the dropped widgets.
    pub fn migrate_all(&mut self, new_spec: GridSpec) -> Vec<WidgetId> {
        let old_spec = self.spec;
        let mut claimed = Occupancy::new();
        let mut dropped = Vec::new();

        self.widgets.retain_mut(|widget| {
            let indices =
                grid_calculator::migrate(&widget.cell_indices, widget.span, &old_spec, &new_spec);
            if indices.is_empty() || !claimed.can_place(&indices) {
                dropped.push(widget.id);
                return false;
            }
            claimed.claim(&indices);
            widget.cell_indices = indices;
            widget.offset_stale = true;
            true
        });
        self.spec = new_spec;

        info!(
            "Migrated grid {} -> {}: {} kept, {} dropped",
            old_spec,
            new_spec,
            self.widgets.len(),
            dropped.len()
        );
        dropped
    }

    /// Replaces the grid shape and bounds together.
    ///
    /// Migrates when the shape changed, then recomputes every offset.
    /// Returns the ids of widgets dropped by the migration.
    pub fn set_grid(&mut self, spec: GridSpec, bounds: GridBounds) -> Vec<WidgetId> {
        let dropped = if spec != self.spec {
            self.migrate_all(spec)
        } else {
            Vec::new()
        };
        self.bounds = bounds;
        self.refresh_offsets();
        dropped
    }

    /// Updates the bounds after a host re-measure and recomputes offsets.
    pub fn set_bounds(&mut self, bounds: GridBounds) {
        if bounds != self.bounds {
            debug!("Grid bounds changed to {:?}", bounds);
            self.bounds = bounds;
        }
        self.refresh_offsets();
    }

    /// Recomputes `pixel_offset` of every widget from the current bounds.
    pub fn refresh_offsets(&mut self) {
        let offsets: Vec<Option<Point>> = self
            .widgets
            .iter()
            .map(|w| w.start(&self.spec).map(|start| self.pixel_offset(start, w.span)))
            .collect();

        for (widget, offset) in self.widgets.iter_mut().zip(offsets) {
            if let Some(offset) = offset {
                widget.pixel_offset = offset;
                widget.offset_stale = false;
            }
        }
    }

    /// First start position, row-major, where `span` is in bounds and free.
    pub fn find_first_available(&self, span: Span) -> Option<CellPosition> {
        let occupied = self.occupied(None);
        let columns = self.spec.columns();
        (0..self.spec.rows())
            .flat_map(|row| (0..columns).map(move |column| CellPosition::new(row, column)))
            .find(|&start| {
                let indices = grid_calculator::indices(start, span, &self.spec);
                !indices.is_empty() && occupied.can_place(&indices)
            })
    }

    /// Places a widget at the first free position.
    pub fn add_at_first_available(
        &mut self,
        kind: Option<String>,
        span: Span,
    ) -> Result<&PlacedWidget, PlacementError> {
        let start = self
            .find_first_available(span)
            .ok_or(PlacementError::NoSpace { span })?;
        self.add_kind(kind, span, start)
    }

    /// Re-inserts a record produced by the persistence layer.
    ///
    /// The record must describe a contiguous in-grid block for its span and
    /// must not collide with placed widgets. Its cell list is normalised to
    /// row-major order and its offset recomputed.
    pub fn restore(&mut self, mut widget: PlacedWidget) -> Result<&PlacedWidget, PlacementError> {
        if self.contains(widget.id) {
            return Err(PlacementError::DuplicateWidget(widget.id));
        }

        let start = widget
            .start(&self.spec)
            .ok_or_else(|| PlacementError::MalformedRecord {
                id: widget.id,
                reason: "no cells".to_string(),
            })?;
        let expected = self.target_indices(start, widget.span)?;

        let given: BTreeSet<usize> = widget.cell_indices.iter().copied().collect();
        let wanted: BTreeSet<usize> = expected.iter().copied().collect();
        if given.len() != widget.cell_indices.len() || given != wanted {
            return Err(PlacementError::MalformedRecord {
                id: widget.id,
                reason: format!(
                    "cells {:?} are not a {} block starting at {}",
                    widget.cell_indices, widget.span, start
                ),
            });
        }

        let conflicts = self.occupied(None).conflicts(&expected);
        if !conflicts.is_empty() {
            return Err(PlacementError::Occupied { conflicts });
        }

        widget.cell_indices = expected;
        widget.pixel_offset = self.pixel_offset(start, widget.span);
        widget.offset_stale = false;
        debug!("Restored widget {} at {}", widget.id, start);

        let index = self.widgets.len();
        self.widgets.push(widget);
        Ok(&self.widgets[index])
    }
}
