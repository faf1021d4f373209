//! # WidgetGrid
//!
//! Grid placement engine for a widget-based canvas editor:
//! - Fixed rows x columns grids derived from a layout size and density
//! - Multi-cell widgets that never overlap
//! - Drag-and-drop with live snapping previews
//! - Migration of placed widgets when the grid changes shape
//!
//! ## Architecture
//!
//! WidgetGrid is organized as a workspace with multiple crates:
//!
//! 1. **widgetgrid-core** - Geometry, grid descriptors, widget records, palette, errors
//! 2. **widgetgrid-designer** - Grid calculator, occupancy, placement store, drag controller
//! 3. **widgetgrid-settings** - Configuration files and settings manager
//! 4. **widgetgrid** - Facade crate and the session replay binary

pub mod session;

pub use widgetgrid_core::{
    CellPosition, Error, GridBounds, GridCell, GridDensity, GridError, GridSpec, LayoutSize,
    Palette, PaletteEntry, PlacedWidget, PlacementError, Point, Rect, Result, Size, Span,
    WidgetId,
};

pub use widgetgrid_designer::{
    grid_calculator, DeletePolicy, DragController, DragPreview, DragSession, DraggedItem,
    DropOutcome, Occupancy, PixelMetrics, PlacementStore, WidgetCanvas,
};

pub use widgetgrid_settings::{
    Config, ConfigError, DeleteZone, GridSettings, SettingsError, SettingsManager,
};

pub use session::{replay, Session, SessionError, SessionReplay, SessionReport, SessionStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting on stderr
/// - RUST_LOG environment variable support
///
/// Logs go to stderr so the replay report on stdout stays machine readable.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
