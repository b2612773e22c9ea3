//! Boundary contracts between the playback engine and its embedding.
//!
//! The engine pushes every display change through these traits; it never
//! pulls. Wire a [`RenderSink`] that feeds [`crate::orp::split`] output to
//! the actual display surface, and a [`PlaybackObserver`] for any status UI
//! that reacts to lifecycle transitions.

use crate::engine::PlaybackState;
use crate::orp::{self, WordSplit};

/// Paints the currently displayed word.
///
/// Called whenever the displayed word changes: on load, on start, on tick
/// advance, and on reset. `clear` is called when the loaded sequence is
/// empty.
pub trait RenderSink {
    fn render(&mut self, word: &str);
    fn clear(&mut self);
}

/// Optional hooks for lifecycle and word-change notifications.
///
/// `state_changed` fires on every lifecycle transition; `word_shown` fires
/// with the raw word string alongside each render, for UI that shows
/// auxiliary metadata separately from the painted split. Both default to
/// no-ops, and `()` implements the trait for callers that do not observe.
pub trait PlaybackObserver {
    fn state_changed(&mut self, _state: PlaybackState) {}
    fn word_shown(&mut self, _word: &str) {}
}

impl PlaybackObserver for () {}

/// Display surface that paints the three spans of a split word. The focus
/// span is the character the reader's eye should land on; surfaces
/// typically pin it to a fixed column and color it.
pub trait SpanSurface {
    fn paint(&mut self, split: WordSplit<'_>);
    fn clear(&mut self);
}

/// The authoritative word renderer: splits each word around its ORP and
/// hands the spans to the injected surface.
pub struct OrpRender<S>
where
    S: SpanSurface,
{
    surface: S,
}

impl<S> OrpRender<S>
where
    S: SpanSurface,
{
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S> RenderSink for OrpRender<S>
where
    S: SpanSurface,
{
    fn render(&mut self, word: &str) {
        if word.is_empty() {
            self.surface.clear();
            return;
        }
        self.surface.paint(orp::split(word));
    }

    fn clear(&mut self) {
        self.surface.clear();
    }
}

/// No-display render sink for headless use and bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullRender;

impl NullRender {
    pub const fn new() -> Self {
        Self
    }
}

impl RenderSink for NullRender {
    fn render(&mut self, _word: &str) {}

    fn clear(&mut self) {}
}
