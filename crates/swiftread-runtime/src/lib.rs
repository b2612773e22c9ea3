//! Host timer driver for the RSVP core.
//!
//! [`Player`] owns a [`PlaybackEngine`] on a dedicated playback thread and
//! supplies the monotonic clock the core is written against. All engine
//! mutation happens on that thread, in command arrival order, behind a
//! channel: the single serialization boundary the engine's state requires.
//! Between deadlines the thread sleeps; exactly one deadline is outstanding
//! per engine.
//!
//! Engine output crosses back as [`PlayerEvent`]s on an event channel, so
//! embeddings consume display changes without touching engine state.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use log::debug;
use swiftread_core::engine::{EngineConfig, PlaybackEngine, PlaybackState};
use swiftread_core::render::{PlaybackObserver, RenderSink};

/// Engine output delivered to the embedding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayerEvent {
    /// A word became the displayed word.
    Word(String),
    /// The display was cleared (an empty sequence was loaded).
    Cleared,
    /// The engine transitioned lifecycle states.
    StateChanged(PlaybackState),
}

#[derive(Debug)]
enum Command {
    LoadText(String),
    LoadWords(Vec<String>),
    SetSpeed(u16),
    Start,
    Pause,
    Reset,
    Shutdown,
}

/// Errors surfaced by the [`Player`] handle.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("playback thread is no longer running")]
    Disconnected,
}

/// Handle to the playback thread. Dropping the handle shuts the thread
/// down; [`Player::shutdown`] does the same explicitly.
pub struct Player {
    commands: Sender<Command>,
    events: Receiver<PlayerEvent>,
    thread: Option<JoinHandle<()>>,
}

impl Player {
    /// Start a playback thread with an engine built from `config`.
    pub fn spawn(config: EngineConfig) -> Self {
        let (command_tx, command_rx) = crossbeam_channel::unbounded();
        let (event_tx, event_rx) = crossbeam_channel::unbounded();

        let thread = thread::spawn(move || run_playback(command_rx, event_tx, config));

        Self {
            commands: command_tx,
            events: event_rx,
            thread: Some(thread),
        }
    }

    /// Receiver for display and lifecycle events.
    pub fn events(&self) -> &Receiver<PlayerEvent> {
        &self.events
    }

    pub fn load_text(&self, text: impl Into<String>) -> Result<(), PlayerError> {
        self.send(Command::LoadText(text.into()))
    }

    pub fn load_words(&self, words: Vec<String>) -> Result<(), PlayerError> {
        self.send(Command::LoadWords(words))
    }

    pub fn set_speed(&self, wpm: u16) -> Result<(), PlayerError> {
        self.send(Command::SetSpeed(wpm))
    }

    pub fn start(&self) -> Result<(), PlayerError> {
        self.send(Command::Start)
    }

    pub fn pause(&self) -> Result<(), PlayerError> {
        self.send(Command::Pause)
    }

    pub fn reset(&self) -> Result<(), PlayerError> {
        self.send(Command::Reset)
    }

    /// Stop the playback thread and wait for it to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn send(&self, command: Command) -> Result<(), PlayerError> {
        self.commands
            .send(command)
            .map_err(|_| PlayerError::Disconnected)
    }

    fn stop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Channel-backed implementation of the core sink traits. The playback
/// thread holds two of these: one as the render sink, one as the observer.
struct EventSink {
    events: Sender<PlayerEvent>,
}

impl EventSink {
    fn emit(&self, event: PlayerEvent) {
        if self.events.send(event).is_err() {
            debug!("event receiver dropped; discarding engine output");
        }
    }
}

impl RenderSink for EventSink {
    fn render(&mut self, word: &str) {
        self.emit(PlayerEvent::Word(word.to_owned()));
    }

    fn clear(&mut self) {
        self.emit(PlayerEvent::Cleared);
    }
}

impl PlaybackObserver for EventSink {
    fn state_changed(&mut self, state: PlaybackState) {
        self.emit(PlayerEvent::StateChanged(state));
    }
}

fn run_playback(commands: Receiver<Command>, events: Sender<PlayerEvent>, config: EngineConfig) {
    let epoch = Instant::now();
    let renderer = EventSink {
        events: events.clone(),
    };
    let observer = EventSink { events };
    let mut engine = PlaybackEngine::new(renderer, observer, config);

    loop {
        let now_ms = elapsed_ms(epoch);

        let received = match engine.next_deadline_ms() {
            Some(deadline) => {
                let wait = Duration::from_millis(deadline.saturating_sub(now_ms));
                match commands.recv_timeout(wait) {
                    Ok(command) => Some(command),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            // Nothing armed: block until the embedding says something.
            None => match commands.recv() {
                Ok(command) => Some(command),
                Err(_) => break,
            },
        };

        let now_ms = elapsed_ms(epoch);
        match received {
            Some(Command::Shutdown) => break,
            Some(Command::LoadText(text)) => engine.load_text(&text),
            Some(Command::LoadWords(words)) => engine.load_words(words),
            Some(Command::SetSpeed(wpm)) => engine.set_speed(wpm, now_ms),
            Some(Command::Start) => engine.start(now_ms),
            Some(Command::Pause) => engine.pause(),
            Some(Command::Reset) => engine.reset(),
            None => {
                engine.tick(now_ms);
            }
        }
    }

    debug!("playback thread exiting");
}

fn elapsed_ms(epoch: Instant) -> u64 {
    epoch.elapsed().as_millis() as u64
}
