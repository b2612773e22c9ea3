//! Playback state machine driving RSVP word advancement.

use log::debug;

use crate::{
    render::{PlaybackObserver, RenderSink},
    text::tokenize,
};

/// Lifecycle of a loaded text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Finished,
}

impl PlaybackState {
    /// Stable lowercase name for external status UI.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Finished => "finished",
        }
    }
}

/// Outcome of a [`PlaybackEngine::tick`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    /// Nothing due: not playing, no deadline armed, or the deadline has not
    /// elapsed yet.
    NoChange,
    /// Advanced to and displayed the next word.
    Advanced,
    /// Ran past the last word; playback is now [`PlaybackState::Finished`].
    Finished,
}

/// Speed bounds and initial rate, in words per minute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 10,
            max_wpm: 1200,
        }
    }
}

/// Convert words-per-minute to the per-word display interval.
pub fn wpm_to_ms(wpm: u16) -> u32 {
    60_000u32 / wpm.max(1) as u32
}

/// Owns the word sequence, position, speed, and lifecycle state, and pushes
/// every display change through the injected sinks.
///
/// The engine is deadline-driven: at most one pending deadline exists per
/// instance, and every mutating operation clears it before optionally
/// arming a new one. A host driver supplies monotonic milliseconds and
/// pumps [`tick`](Self::tick); between deadlines the engine is inert.
pub struct PlaybackEngine<R, O>
where
    R: RenderSink,
    O: PlaybackObserver,
{
    renderer: R,
    observer: O,
    config: EngineConfig,
    words: Vec<String>,
    position: usize,
    next_word_ms: Option<u64>,
    state: PlaybackState,
}

impl<R, O> PlaybackEngine<R, O>
where
    R: RenderSink,
    O: PlaybackObserver,
{
    pub fn new(renderer: R, observer: O, config: EngineConfig) -> Self {
        let mut engine = Self {
            renderer,
            observer,
            config,
            words: Vec::new(),
            position: 0,
            next_word_ms: None,
            state: PlaybackState::Idle,
        };
        engine.config.wpm = engine.clamp_wpm(config.wpm);
        engine
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn speed_wpm(&self) -> u16 {
        self.config.wpm
    }

    /// Zero-based index of the currently displayed word. Equal to
    /// [`word_count`](Self::word_count) once playback has finished.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.position).map(String::as_str)
    }

    /// Deadline the driver should sleep toward, when one is armed.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.next_word_ms
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

include!("runtime.rs");

#[cfg(test)]
mod tests;
