//! Widget canvas: the surface the host UI talks to.
//!
//! Bundles the placement store, the drag controller, the palette and the
//! active drag session. The host feeds it pointer samples and drop/cancel
//! events and reads back cells, hovered cells and occupancy for drawing.

use crate::drag_controller::{
    DeletePolicy, DragController, DragPreview, DragSession, DraggedItem, DropOutcome,
};
use crate::occupancy::Occupancy;
use crate::placement_store::{PixelMetrics, PlacementStore};
use tracing::{info, warn};
use widgetgrid_core::{
    GridBounds, GridCell, GridDensity, GridSpec, LayoutSize, Palette, PlacedWidget,
    PlacementError, Point, Span, WidgetId,
};

/// Canvas state managing placed widgets and drag interaction.
#[derive(Debug, Clone)]
pub struct WidgetCanvas {
    store: PlacementStore,
    controller: DragController,
    palette: Palette,
    layout: LayoutSize,
    density: GridDensity,
    active_drag: Option<DragSession>,
}

impl WidgetCanvas {
    /// Creates a canvas for a layout size and density inside `bounds`.
    pub fn new(layout: LayoutSize, density: GridDensity, bounds: GridBounds) -> Self {
        Self {
            store: PlacementStore::new(GridSpec::for_layout(layout, density), bounds),
            controller: DragController::default(),
            palette: Palette::builtin(),
            layout,
            density,
            active_drag: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_metrics(mut self, metrics: PixelMetrics) -> Self {
        self.store.set_metrics(metrics);
        self
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.controller.set_delete_policy(policy);
        self
    }

    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn layout(&self) -> LayoutSize {
        self.layout
    }

    pub fn density(&self) -> GridDensity {
        self.density
    }

    pub fn spec(&self) -> &GridSpec {
        self.store.spec()
    }

    pub fn widgets(&self) -> &[PlacedWidget] {
        self.store.widgets()
    }

    /// Cells of the current grid, for drawing.
    pub fn cells(&self) -> Vec<GridCell> {
        self.store.cells()
    }

    /// Cells claimed by placed widgets.
    pub fn occupied(&self) -> Occupancy {
        self.store.occupied(None)
    }

    /// Cells to highlight for the active drag, empty when none.
    pub fn hovered(&self) -> &[usize] {
        self.active_drag
            .as_ref()
            .map(|s| s.hovered())
            .unwrap_or_default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    pub fn active_drag(&self) -> Option<&DragSession> {
        self.active_drag.as_ref()
    }

    /// Switches layout size and/or density.
    ///
    /// Placed widgets migrate to the new grid; the ids of widgets that no
    /// longer fit are returned. Any active drag is abandoned.
    pub fn set_layout(
        &mut self,
        layout: LayoutSize,
        density: GridDensity,
        bounds: GridBounds,
    ) -> Vec<WidgetId> {
        self.active_drag = None;
        self.layout = layout;
        self.density = density;
        let spec = GridSpec::for_layout(layout, density);
        info!("Layout set to {} / {} ({})", layout, density, spec);
        self.store.set_grid(spec, bounds)
    }

    /// Host re-measured the grid container.
    pub fn set_bounds(&mut self, bounds: GridBounds) {
        self.store.set_bounds(bounds);
    }

    /// Starts dragging a palette widget of `kind`.
    pub fn begin_palette_drag(&mut self, kind: &str) -> Result<(), PlacementError> {
        let span = self
            .palette
            .span_for(kind, self.layout)
            .ok_or_else(|| PlacementError::UnknownKind(kind.to_string()))?;
        self.active_drag = Some(self.controller.begin(DraggedItem::NewWidget {
            kind: Some(kind.to_string()),
            span,
        }));
        Ok(())
    }

    /// Starts dragging a placed widget.
    pub fn begin_widget_drag(&mut self, id: WidgetId) -> Result<(), PlacementError> {
        let span = self
            .store
            .get(id)
            .map(|w| w.span)
            .ok_or(PlacementError::UnknownWidget(id))?;
        self.active_drag = Some(self.controller.begin(DraggedItem::ExistingWidget { id, span }));
        Ok(())
    }

    /// Feeds a pointer sample to the active drag.
    ///
    /// Returns `None` when no drag is active.
    pub fn drag_to(&mut self, point: Point) -> Option<&DragPreview> {
        let session = self.active_drag.as_mut()?;
        Some(self.controller.update(session, &self.store, point))
    }

    /// Releases the active drag at `point`.
    pub fn drop_at(&mut self, point: Point) -> Option<DropOutcome> {
        let session = self.active_drag.take()?;
        let outcome = self.controller.drop(session, &mut self.store, point);
        info!("Drop at {}: {:?}", point, outcome);
        Some(outcome)
    }

    /// Abandons the active drag.
    pub fn cancel_drag(&mut self) -> Option<DropOutcome> {
        let session = self.active_drag.take()?;
        Some(self.controller.cancel(session))
    }

    /// Places a palette widget at the first free position.
    pub fn add_to_canvas(&mut self, kind: &str) -> Result<WidgetId, PlacementError> {
        let span = self
            .palette
            .span_for(kind, self.layout)
            .ok_or_else(|| PlacementError::UnknownKind(kind.to_string()))?;
        let widget = self
            .store
            .add_at_first_available(Some(kind.to_string()), span)?;
        Ok(widget.id)
    }

    /// Places a widget of no palette kind, `width` x `height` cells, at the
    /// first free position.
    pub fn add_custom(
        &mut self,
        width: usize,
        height: usize,
    ) -> widgetgrid_core::Result<WidgetId> {
        let span = Span::new(width, height)?;
        let widget = self.store.add_at_first_available(None, span)?;
        Ok(widget.id)
    }

    /// Deletes a placed widget directly.
    pub fn remove(&mut self, id: WidgetId) -> Option<PlacedWidget> {
        if self
            .active_drag
            .as_ref()
            .is_some_and(|s| s.item().existing_id() == Some(id))
        {
            self.active_drag = None;
        }
        self.store.remove(id)
    }

    /// Re-inserts persisted widget records, skipping invalid ones.
    ///
    /// Returns the records that were rejected together with the reason.
    pub fn restore(
        &mut self,
        widgets: impl IntoIterator<Item = PlacedWidget>,
    ) -> Vec<(PlacedWidget, PlacementError)> {
        let mut rejected = Vec::new();
        for widget in widgets {
            if let Err(err) = self.store.restore(widget.clone()) {
                warn!("Skipping persisted widget {}: {}", widget.id, err);
                rejected.push((widget, err));
            }
        }
        rejected
    }
}
