use std::collections::BTreeSet;
use widgetgrid_core::{PlacedWidget, WidgetId};

/// The set of cell indices claimed by placed widgets.
///
/// Built with an optional excluded widget: while a widget is being moved,
/// every one of its own original cells is left out, so it can be dragged
/// across a position that overlaps its previous footprint while still
/// colliding with every other widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: BTreeSet<usize>,
}

impl Occupancy {
    /// Creates an empty occupancy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the cells of `widgets`, skipping the widget with id `excluding`.
    pub fn from_widgets<'a>(
        widgets: impl IntoIterator<Item = &'a PlacedWidget>,
        excluding: Option<WidgetId>,
    ) -> Self {
        let cells = widgets
            .into_iter()
            .filter(|w| Some(w.id) != excluding)
            .flat_map(|w| w.cell_indices.iter().copied())
            .collect();
        Self { cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// True iff none of `indices` is occupied.
    pub fn can_place(&self, indices: &[usize]) -> bool {
        indices.iter().all(|i| !self.cells.contains(i))
    }

    /// The subset of `indices` that is already occupied.
    pub fn conflicts(&self, indices: &[usize]) -> Vec<usize> {
        indices
            .iter()
            .copied()
            .filter(|i| self.cells.contains(i))
            .collect()
    }

    /// Marks `indices` as occupied.
    pub fn claim(&mut self, indices: &[usize]) {
        self.cells.extend(indices.iter().copied());
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_set(&self) -> &BTreeSet<usize> {
        &self.cells
    }
}

/// Union of the cells of every widget except `excluding`.
pub fn occupied<'a>(
    widgets: impl IntoIterator<Item = &'a PlacedWidget>,
    excluding: Option<WidgetId>,
) -> Occupancy {
    Occupancy::from_widgets(widgets, excluding)
}

/// True iff `indices` and `occupied` are disjoint.
pub fn can_place(indices: &[usize], occupied: &Occupancy) -> bool {
    occupied.can_place(indices)
}
