//! # widgetgrid designer
//!
//! The grid placement engine: it turns a continuous pointer position into a
//! discrete, collision-free cell assignment, previews it while dragging, and
//! re-flows placed widgets when the grid's row/column count changes.
//!
//! ## Architecture
//!
//! The engine is layered, leaf first:
//!
//! ```text
//! grid_calculator  (pure geometry and index arithmetic)
//!   └── occupancy        (which cells are taken)
//!         └── placement_store  (add / move / remove / migrate)
//!               └── drag_controller  (per-sample preview, drop commit)
//!                     └── canvas           (host UI facade)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use widgetgrid_core::{GridBounds, GridDensity, LayoutSize, Point, Size};
//! use widgetgrid_designer::{DropOutcome, WidgetCanvas};
//!
//! let bounds = GridBounds::new(Point::zero(), Size::new(400.0, 200.0));
//! let mut canvas = WidgetCanvas::new(LayoutSize::Medium, GridDensity::Standard, bounds);
//!
//! canvas.begin_palette_drag("clock").unwrap();
//! canvas.drag_to(Point::new(150.0, 150.0));
//! assert_eq!(canvas.hovered(), &[5]);
//! assert!(matches!(canvas.drop_at(Point::new(150.0, 150.0)), Some(DropOutcome::Added(_))));
//! ```

pub mod canvas;
pub mod drag_controller;
pub mod grid_calculator;
pub mod occupancy;
pub mod placement_store;

pub use canvas::WidgetCanvas;
pub use drag_controller::{
    DeletePolicy, DragController, DragPreview, DragSession, DraggedItem, DropOutcome,
};
pub use occupancy::Occupancy;
pub use placement_store::{PixelMetrics, PlacementStore};
