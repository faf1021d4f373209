//! Widget palette: the catalogue of widget kinds a user can drag onto the grid.
//!
//! Each kind has a fixed span, optionally overridden for particular layout
//! sizes (a weather widget might be 2x2 on a large canvas but 2x1 on a
//! medium one).

use crate::grid::Span;
use crate::layout::LayoutSize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One draggable widget kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub kind: String,
    pub default_span: Span,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub layout_spans: BTreeMap<LayoutSize, Span>,
}

impl PaletteEntry {
    pub fn new(kind: impl Into<String>, default_span: Span) -> Self {
        Self {
            kind: kind.into(),
            default_span,
            layout_spans: BTreeMap::new(),
        }
    }

    /// Overrides the span for one layout size.
    pub fn with_layout_span(mut self, layout: LayoutSize, span: Span) -> Self {
        self.layout_spans.insert(layout, span);
        self
    }

    /// The span this kind occupies under `layout`.
    pub fn span_for(&self, layout: LayoutSize) -> Span {
        self.layout_spans
            .get(&layout)
            .copied()
            .unwrap_or(self.default_span)
    }
}

/// Ordered collection of palette entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// The built-in widget kinds.
    pub fn builtin() -> Self {
        let span = |w, h| Span::new(w, h).unwrap_or(Span::unit());
        Self::new(vec![
            PaletteEntry::new("clock", span(1, 1)),
            PaletteEntry::new("battery", span(1, 1)),
            PaletteEntry::new("weather", span(2, 1))
                .with_layout_span(LayoutSize::Large, span(2, 2))
                .with_layout_span(LayoutSize::ExtraLarge, span(2, 2)),
            PaletteEntry::new("calendar", span(2, 2))
                .with_layout_span(LayoutSize::Small, span(2, 1)),
            PaletteEntry::new("photo", span(2, 2)),
            PaletteEntry::new("music", span(4, 1))
                .with_layout_span(LayoutSize::Small, span(2, 1)),
        ])
    }

    pub fn get(&self, kind: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// The span of `kind` under `layout`, if the kind exists.
    pub fn span_for(&self, kind: &str, layout: LayoutSize) -> Option<Span> {
        self.get(kind).map(|e| e.span_for(layout))
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
