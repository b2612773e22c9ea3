//! Platform-independent RSVP reading core.
//!
//! Two components compose into a reader: the [`orp`] splitter, a pure
//! function that divides a word into before/focus/after spans around its
//! optimal recognition point, and the [`engine`] playback state machine,
//! which owns the word sequence and advances through it on a timer deadline.
//!
//! Time enters the crate only as `u64` milliseconds. A host driver supplies
//! the clock and pumps [`engine::PlaybackEngine::tick`]; see the
//! `swiftread-runtime` crate for a thread-backed driver.

pub mod engine;
pub mod orp;
pub mod render;
pub mod text;
