//! Recorded drag sessions.
//!
//! A session file describes the grid container, optional persisted widgets
//! and a list of host events. Replaying it drives a [`WidgetCanvas`] exactly
//! as a UI would and reports the resulting placements.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};
use widgetgrid_core::{
    GridBounds, GridDensity, GridSpec, LayoutSize, PlacedWidget, Point, Rect, WidgetId,
};
use widgetgrid_designer::{DeletePolicy, DropOutcome, PixelMetrics, WidgetCanvas};
use widgetgrid_settings::{Config, DeleteZone};

/// Errors raised while loading or replaying a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read session: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Step {step}: no widget labelled '{label}'")]
    UnknownLabel { step: usize, label: String },

    #[error("Step {step}: {source}")]
    Engine {
        step: usize,
        #[source]
        source: widgetgrid_core::Error,
    },

    #[error("Delete zone is outside_canvas but the session has no canvas rectangle")]
    MissingCanvas,
}

/// One host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionStep {
    /// Switch layout size and density; widgets migrate.
    SetLayout {
        layout: LayoutSize,
        density: GridDensity,
    },
    /// The grid container was re-measured.
    Resize { bounds: GridBounds },
    /// Pick up a palette widget; a successful drop records it under `label`.
    BeginPaletteDrag {
        kind: String,
        #[serde(default)]
        label: Option<String>,
    },
    /// Pick up a placed widget.
    BeginWidgetDrag { label: String },
    /// Pointer sample.
    Move { x: f64, y: f64 },
    /// Release at a point.
    Drop { x: f64, y: f64 },
    /// Abandon the drag.
    Cancel,
    /// Place a palette widget at the first free position.
    Add {
        kind: String,
        #[serde(default)]
        label: Option<String>,
    },
    /// Place a widget of no palette kind at the first free position.
    AddCustom {
        width: usize,
        height: usize,
        #[serde(default)]
        label: Option<String>,
    },
    /// Delete a placed widget directly.
    Remove { label: String },
}

/// A recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Grid container on screen.
    pub bounds: GridBounds,
    /// Whole canvas, required by the `outside_canvas` delete zone.
    #[serde(default)]
    pub canvas: Option<Rect>,
    /// Screen origin of the container the widgets are drawn in.
    #[serde(default)]
    pub origin: Point,
    /// Persisted widgets restored before the first step.
    #[serde(default)]
    pub widgets: Vec<PlacedWidget>,
    /// Labels for the persisted widgets.
    #[serde(default)]
    pub labels: BTreeMap<String, WidgetId>,
    pub steps: Vec<SessionStep>,
}

impl Session {
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Final state of a replayed session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub layout: LayoutSize,
    pub density: GridDensity,
    pub grid: GridSpec,
    pub widgets: Vec<PlacedWidget>,
    pub labels: BTreeMap<String, WidgetId>,
    /// Ids removed by drops in the delete zone or dropped by migrations.
    pub removed: Vec<WidgetId>,
    /// Persisted records that failed validation.
    pub rejected: Vec<WidgetId>,
}

/// Replays sessions onto a canvas built from a [`Config`].
#[derive(Debug)]
pub struct SessionReplay {
    canvas: WidgetCanvas,
    labels: BTreeMap<String, WidgetId>,
    pending_label: Option<String>,
    removed: Vec<WidgetId>,
    rejected: Vec<WidgetId>,
}

impl SessionReplay {
    /// Builds the canvas for `session` and restores its persisted widgets.
    pub fn new(config: &Config, session: &Session) -> Result<Self, SessionError> {
        let policy = match config.grid.delete_zone {
            DeleteZone::OutsideGrid => DeletePolicy::OutsideGrid,
            DeleteZone::OutsideCanvas => {
                DeletePolicy::OutsideCanvas(session.canvas.ok_or(SessionError::MissingCanvas)?)
            }
        };

        let mut canvas = WidgetCanvas::new(
            config.grid.layout_size,
            config.grid.density,
            session.bounds,
        )
        .with_palette(config.palette.clone())
        .with_metrics(PixelMetrics {
            origin_correction: session.origin,
            cell_padding: config.grid.cell_padding,
        })
        .with_delete_policy(policy);

        let rejected = canvas
            .restore(session.widgets.iter().cloned())
            .into_iter()
            .map(|(widget, _)| widget.id)
            .collect::<Vec<_>>();

        let labels = session
            .labels
            .iter()
            .filter(|(_, id)| canvas.store().contains(**id))
            .map(|(label, id)| (label.clone(), *id))
            .collect();

        Ok(Self {
            canvas,
            labels,
            pending_label: None,
            removed: Vec::new(),
            rejected,
        })
    }

    pub fn canvas(&self) -> &WidgetCanvas {
        &self.canvas
    }

    /// The widget recorded under `label`.
    pub fn widget(&self, label: &str) -> Option<&PlacedWidget> {
        self.labels.get(label).and_then(|id| self.canvas.store().get(*id))
    }

    /// Applies step number `index` of a session.
    pub fn apply(&mut self, index: usize, step: &SessionStep) -> Result<(), SessionError> {
        debug!("Step {}: {:?}", index, step);
        match step {
            SessionStep::SetLayout { layout, density } => {
                let bounds = *self.canvas.store().bounds();
                self.pending_label = None;
                let dropped = self.canvas.set_layout(*layout, *density, bounds);
                self.forget(&dropped);
            }
            SessionStep::Resize { bounds } => self.canvas.set_bounds(*bounds),
            SessionStep::BeginPaletteDrag { kind, label } => {
                self.canvas.begin_palette_drag(kind).map_err(at_step(index))?;
                self.pending_label = label.clone();
            }
            SessionStep::BeginWidgetDrag { label } => {
                let id = self.lookup(index, label)?;
                self.canvas.begin_widget_drag(id).map_err(at_step(index))?;
                self.pending_label = None;
            }
            SessionStep::Move { x, y } => {
                if self.canvas.drag_to(Point::new(*x, *y)).is_none() {
                    warn!("Step {}: pointer moved with no active drag", index);
                }
            }
            SessionStep::Drop { x, y } => match self.canvas.drop_at(Point::new(*x, *y)) {
                Some(DropOutcome::Added(id)) => {
                    if let Some(label) = self.pending_label.take() {
                        self.labels.insert(label, id);
                    }
                }
                Some(DropOutcome::Removed(id)) => self.forget(&[id]),
                Some(_) => self.pending_label = None,
                None => warn!("Step {}: drop with no active drag", index),
            },
            SessionStep::Cancel => {
                self.pending_label = None;
                if self.canvas.cancel_drag().is_none() {
                    warn!("Step {}: cancel with no active drag", index);
                }
            }
            SessionStep::Add { kind, label } => {
                let id = self
                    .canvas
                    .add_to_canvas(kind)
                    .map_err(at_step(index))?;
                if let Some(label) = label {
                    self.labels.insert(label.clone(), id);
                }
            }
            SessionStep::AddCustom {
                width,
                height,
                label,
            } => {
                let id = self
                    .canvas
                    .add_custom(*width, *height)
                    .map_err(at_step(index))?;
                if let Some(label) = label {
                    self.labels.insert(label.clone(), id);
                }
            }
            SessionStep::Remove { label } => {
                let id = self.lookup(index, label)?;
                if self.canvas.remove(id).is_some() {
                    self.forget(&[id]);
                }
            }
        }
        Ok(())
    }

    /// Applies every step of `session` in order.
    pub fn run(&mut self, session: &Session) -> Result<(), SessionError> {
        for (index, step) in session.steps.iter().enumerate() {
            self.apply(index, step)?;
        }
        info!(
            "Replayed {} steps, {} widgets placed",
            session.steps.len(),
            self.canvas.widgets().len()
        );
        Ok(())
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            layout: self.canvas.layout(),
            density: self.canvas.density(),
            grid: *self.canvas.spec(),
            widgets: self.canvas.widgets().to_vec(),
            labels: self.labels.clone(),
            removed: self.removed.clone(),
            rejected: self.rejected.clone(),
        }
    }

    fn lookup(&self, step: usize, label: &str) -> Result<WidgetId, SessionError> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| SessionError::UnknownLabel {
                step,
                label: label.to_string(),
            })
    }

    fn forget(&mut self, ids: &[WidgetId]) {
        self.labels.retain(|_, id| !ids.contains(id));
        self.removed.extend_from_slice(ids);
    }
}

fn at_step<E: Into<widgetgrid_core::Error>>(step: usize) -> impl FnOnce(E) -> SessionError {
    move |err| SessionError::Engine {
        step,
        source: err.into(),
    }
}

/// Replays `session` from scratch and returns the final state.
pub fn replay(config: &Config, session: &Session) -> Result<SessionReport, SessionError> {
    let mut replay = SessionReplay::new(config, session)?;
    replay.run(session)?;
    Ok(replay.report())
}
