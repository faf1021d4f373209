//! # widgetgrid core
//!
//! Core types and utilities for the widgetgrid placement engine.
//! Provides the geometry primitives, grid shape descriptors, placed widget
//! records, the widget palette and the error taxonomy shared by every crate.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod palette;
pub mod widget;

pub use error::{Error, GridError, PlacementError, Result};
pub use geometry::{Point, Rect, Size};
pub use grid::{CellPosition, GridBounds, GridCell, GridSpec, Span};
pub use layout::{GridDensity, LayoutSize};
pub use palette::{Palette, PaletteEntry};
pub use widget::{PlacedWidget, WidgetId};
