//! Drag interaction controller.
//!
//! Each pointer sample during a drag is turned into a [`DragPreview`] by a
//! pure computation over the placement store: best position, then indices,
//! then an occupancy check. Nothing is mutated until the drop, which commits
//! through the store (add, move or remove) or does nothing at all.
//! Abandoning a drag without dropping leaves no trace.

use crate::grid_calculator;
use crate::placement_store::PlacementStore;
use tracing::{debug, info, warn};
use widgetgrid_core::{CellPosition, Point, Rect, Span, WidgetId};

/// The payload being dragged.
#[derive(Debug, Clone, PartialEq)]
pub enum DraggedItem {
    /// A widget dragged in from the palette.
    NewWidget { kind: Option<String>, span: Span },
    /// A widget already on the grid.
    ExistingWidget { id: WidgetId, span: Span },
}

impl DraggedItem {
    pub fn span(&self) -> Span {
        match self {
            DraggedItem::NewWidget { span, .. } | DraggedItem::ExistingWidget { span, .. } => *span,
        }
    }

    /// The id to exclude from occupancy, for a move in place.
    pub fn existing_id(&self) -> Option<WidgetId> {
        match self {
            DraggedItem::NewWidget { .. } => None,
            DraggedItem::ExistingWidget { id, .. } => Some(*id),
        }
    }
}

/// Placement candidate for one pointer sample.
///
/// `hovered` is empty when there is no valid placement; the host then draws
/// no highlight and a drop is not allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragPreview {
    pub start: Option<CellPosition>,
    pub hovered: Vec<usize>,
}

impl DragPreview {
    pub fn is_droppable(&self) -> bool {
        self.start.is_some() && !self.hovered.is_empty()
    }
}

/// Where dropping an existing widget deletes it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DeletePolicy {
    /// Anywhere outside the grid bounds.
    #[default]
    OutsideGrid,
    /// Anywhere outside a larger canvas rectangle (no active grid).
    OutsideCanvas(Rect),
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A new widget was placed.
    Added(WidgetId),
    /// An existing widget was moved.
    Moved(WidgetId),
    /// An existing widget was dropped in the delete zone and removed.
    Removed(WidgetId),
    /// An existing widget stays where it was.
    Returned(WidgetId),
    /// A new widget was not placed.
    Discarded,
}

/// State of one drag, from pickup to drop.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    item: DraggedItem,
    pointer: Option<Point>,
    preview: DragPreview,
}

impl DragSession {
    pub fn item(&self) -> &DraggedItem {
        &self.item
    }

    /// Last pointer sample, if any.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn preview(&self) -> &DragPreview {
        &self.preview
    }

    /// Hovered cells of the last sample.
    pub fn hovered(&self) -> &[usize] {
        &self.preview.hovered
    }

    fn not_placed(&self) -> DropOutcome {
        match self.item.existing_id() {
            Some(id) => DropOutcome::Returned(id),
            None => DropOutcome::Discarded,
        }
    }
}

/// Turns pointer samples into previews and drops into store commits.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    delete_policy: DeletePolicy,
}

impl DragController {
    pub fn new(delete_policy: DeletePolicy) -> Self {
        Self { delete_policy }
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    pub fn set_delete_policy(&mut self, policy: DeletePolicy) {
        self.delete_policy = policy;
    }

    /// Computes the placement candidate for `item` at `point`.
    pub fn preview(&self, store: &PlacementStore, item: &DraggedItem, point: Point) -> DragPreview {
        let span = item.span();
        let cells = store.cells();
        let Some(start) =
            grid_calculator::best_position(&point, span, &cells, store.spec(), store.bounds())
        else {
            return DragPreview::default();
        };

        let indices = grid_calculator::indices(start, span, store.spec());
        if indices.is_empty() || !store.occupied(item.existing_id()).can_place(&indices) {
            return DragPreview::default();
        }

        DragPreview {
            start: Some(start),
            hovered: indices,
        }
    }

    /// Whether releasing `item` at `point` means "delete".
    ///
    /// Only widgets already on the grid can be deleted.
    pub fn is_delete_drop(&self, store: &PlacementStore, item: &DraggedItem, point: Point) -> bool {
        if item.existing_id().is_none() {
            return false;
        }
        match self.delete_policy {
            DeletePolicy::OutsideGrid => !store.bounds().contains(&point),
            DeletePolicy::OutsideCanvas(canvas) => !canvas.contains(&point),
        }
    }

    /// Starts a drag; no preview exists until the first pointer sample.
    pub fn begin(&self, item: DraggedItem) -> DragSession {
        debug!("Drag started: {:?}", item);
        DragSession {
            item,
            pointer: None,
            preview: DragPreview::default(),
        }
    }

    /// Feeds a pointer sample and returns the refreshed preview.
    pub fn update<'s>(
        &self,
        session: &'s mut DragSession,
        store: &PlacementStore,
        point: Point,
    ) -> &'s DragPreview {
        session.pointer = Some(point);
        session.preview = self.preview(store, &session.item, point);
        debug!(
            "Drag sample at {}: start {:?}, hovered {:?}",
            point, session.preview.start, session.preview.hovered
        );
        &session.preview
    }

    /// Releases the drag at `point` and commits the result.
    pub fn drop(
        &self,
        mut session: DragSession,
        store: &mut PlacementStore,
        point: Point,
    ) -> DropOutcome {
        if self.is_delete_drop(store, &session.item, point) {
            if let Some(id) = session.item.existing_id() {
                return match store.remove(id) {
                    Some(_) => DropOutcome::Removed(id),
                    None => {
                        warn!("Dropped widget {} in delete zone but it is not placed", id);
                        DropOutcome::Discarded
                    }
                };
            }
        }

        self.update(&mut session, store, point);
        let Some(start) = session.preview.start.filter(|_| session.preview.is_droppable()) else {
            debug!("Drop at {} has no valid placement", point);
            return session.not_placed();
        };

        match session.item {
            DraggedItem::NewWidget { kind, span } => match store.add_kind(kind, span, start) {
                Ok(widget) => DropOutcome::Added(widget.id),
                Err(err) => {
                    warn!("Drop rejected by store: {}", err);
                    DropOutcome::Discarded
                }
            },
            DraggedItem::ExistingWidget { id, .. } => match store.move_to(id, start) {
                Ok(()) => DropOutcome::Moved(id),
                Err(err) => {
                    warn!("Move rejected by store: {}", err);
                    DropOutcome::Returned(id)
                }
            },
        }
    }

    /// Abandons the drag without touching the store.
    pub fn cancel(&self, session: DragSession) -> DropOutcome {
        info!("Drag cancelled");
        session.not_placed()
    }
}
