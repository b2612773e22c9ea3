use super::*;
use crate::render::{PlaybackObserver, RenderSink};

#[derive(Default)]
struct PaintLog {
    painted: Vec<String>,
    cleared: usize,
}

impl RenderSink for PaintLog {
    fn render(&mut self, word: &str) {
        self.painted.push(word.to_owned());
    }

    fn clear(&mut self) {
        self.cleared += 1;
    }
}

#[derive(Default)]
struct StateLog {
    states: Vec<PlaybackState>,
    words: Vec<String>,
}

impl PlaybackObserver for StateLog {
    fn state_changed(&mut self, state: PlaybackState) {
        self.states.push(state);
    }

    fn word_shown(&mut self, word: &str) {
        self.words.push(word.to_owned());
    }
}

fn engine_at(wpm: u16) -> PlaybackEngine<PaintLog, StateLog> {
    let config = EngineConfig {
        wpm,
        ..EngineConfig::default()
    };
    PlaybackEngine::new(PaintLog::default(), StateLog::default(), config)
}

#[test]
fn load_displays_first_word_without_waiting() {
    let mut engine = engine_at(60);
    engine.load_text("The quick fox");

    assert_eq!(engine.renderer().painted, ["The"]);
    assert_eq!(engine.observer().states, [PlaybackState::Idle]);
    assert_eq!(engine.position(), 0);
    assert_eq!(engine.next_deadline_ms(), None);
}

#[test]
fn words_advance_on_interval_boundaries() {
    // 60 wpm -> 1000 ms per word
    let mut engine = engine_at(60);
    engine.load_text("The quick fox");
    engine.start(0);

    assert_eq!(engine.renderer().painted, ["The", "The"]);
    assert_eq!(engine.tick(999), TickResult::NoChange);
    assert_eq!(engine.tick(1_000), TickResult::Advanced);
    assert_eq!(engine.renderer().painted.last().unwrap(), "quick");
    assert_eq!(engine.tick(1_999), TickResult::NoChange);
    assert_eq!(engine.tick(2_000), TickResult::Advanced);
    assert_eq!(engine.renderer().painted.last().unwrap(), "fox");

    assert_eq!(engine.tick(3_000), TickResult::Finished);
    assert_eq!(engine.state(), PlaybackState::Finished);
    assert_eq!(engine.next_deadline_ms(), None);
    assert_eq!(engine.observer().states, [
        PlaybackState::Idle,
        PlaybackState::Playing,
        PlaybackState::Finished,
    ]);
}

#[test]
fn word_update_sink_sees_every_displayed_word() {
    let mut engine = engine_at(60);
    engine.load_text("a b c");
    engine.start(0);
    engine.tick(1_000);
    engine.tick(2_000);

    assert_eq!(engine.observer().words, ["a", "a", "b", "c"]);
    assert_eq!(engine.observer().words, engine.renderer().painted);
}

#[test]
fn pause_then_start_resumes_from_the_same_position() {
    let mut engine = engine_at(60);
    engine.load_text("a b c");
    engine.start(0);
    engine.tick(1_000);
    assert_eq!(engine.position(), 1);

    engine.pause();
    assert_eq!(engine.state(), PlaybackState::Paused);
    assert_eq!(engine.next_deadline_ms(), None);
    assert_eq!(engine.tick(50_000), TickResult::NoChange);
    assert_eq!(engine.position(), 1);

    engine.start(5_000);
    assert_eq!(engine.position(), 1);
    assert_eq!(engine.renderer().painted.last().unwrap(), "b");
    assert_eq!(engine.next_deadline_ms(), Some(6_000));
    assert_eq!(engine.tick(6_000), TickResult::Advanced);
    assert_eq!(engine.renderer().painted.last().unwrap(), "c");
}

#[test]
fn pause_is_a_noop_unless_playing() {
    let mut engine = engine_at(60);
    engine.load_text("a b");

    engine.pause();
    assert_eq!(engine.state(), PlaybackState::Idle);
    assert_eq!(engine.observer().states, [PlaybackState::Idle]);
}

#[test]
fn reset_returns_to_the_first_word() {
    let mut engine = engine_at(60);
    engine.load_text("a b c");
    engine.start(0);
    engine.tick(1_000);

    engine.reset();
    assert_eq!(engine.state(), PlaybackState::Idle);
    assert_eq!(engine.position(), 0);
    assert_eq!(engine.next_deadline_ms(), None);
    assert_eq!(engine.renderer().painted.last().unwrap(), "a");
}

#[test]
fn start_with_no_words_is_a_noop() {
    let mut engine = engine_at(60);
    engine.start(0);

    assert_eq!(engine.state(), PlaybackState::Idle);
    assert!(engine.observer().states.is_empty());
    assert!(engine.renderer().painted.is_empty());
}

#[test]
fn loading_empty_text_clears_the_display() {
    let mut engine = engine_at(60);
    engine.load_text("something");
    engine.load_words(Vec::new());

    assert_eq!(engine.renderer().cleared, 1);
    assert_eq!(engine.state(), PlaybackState::Idle);
    assert_eq!(engine.current_word(), None);
}

#[test]
fn pre_tokenized_load_drops_empty_tokens() {
    let mut engine = engine_at(60);
    engine.load_words(vec![String::new(), "kept".to_owned(), String::new()]);

    assert_eq!(engine.word_count(), 1);
    assert_eq!(engine.current_word(), Some("kept"));
}

#[test]
fn finished_is_terminal_until_start_restarts() {
    let mut engine = engine_at(60);
    engine.load_text("a b");
    engine.start(0);
    engine.tick(1_000);
    assert_eq!(engine.tick(2_000), TickResult::Finished);

    assert_eq!(engine.tick(10_000), TickResult::NoChange);
    assert_eq!(engine.state(), PlaybackState::Finished);

    engine.start(20_000);
    assert_eq!(engine.state(), PlaybackState::Playing);
    assert_eq!(engine.position(), 0);
    assert_eq!(engine.renderer().painted.last().unwrap(), "a");
}

#[test]
fn load_interrupts_playback() {
    let mut engine = engine_at(60);
    engine.load_text("a b c");
    engine.start(0);

    engine.load_text("x y");
    assert_eq!(engine.state(), PlaybackState::Idle);
    assert_eq!(engine.next_deadline_ms(), None);
    assert_eq!(engine.position(), 0);
    assert_eq!(engine.renderer().painted.last().unwrap(), "x");
}

#[test]
fn set_speed_while_playing_rebases_only_the_countdown() {
    let mut engine = engine_at(60);
    engine.load_text("a b c");
    engine.start(0);
    assert_eq!(engine.next_deadline_ms(), Some(1_000));

    // 120 wpm -> 500 ms; rebased from now, not from the old deadline
    engine.set_speed(120, 400);
    assert_eq!(engine.next_deadline_ms(), Some(900));
    assert_eq!(engine.renderer().painted, ["a", "a"]);

    assert_eq!(engine.tick(899), TickResult::NoChange);
    assert_eq!(engine.tick(900), TickResult::Advanced);
    assert_eq!(engine.position(), 1);
    // exactly one advancement within the former 0..1000 window
    assert_eq!(engine.tick(999), TickResult::NoChange);
}

#[test]
fn set_speed_outside_playback_does_not_arm_a_timer() {
    let mut engine = engine_at(60);
    engine.load_text("a b");

    engine.set_speed(120, 777);
    assert_eq!(engine.speed_wpm(), 120);
    assert_eq!(engine.next_deadline_ms(), None);

    engine.start(0);
    engine.pause();
    engine.set_speed(240, 888);
    assert_eq!(engine.next_deadline_ms(), None);
}

#[test]
fn speed_is_clamped_into_configured_bounds() {
    let mut engine = engine_at(60);
    engine.set_speed(0, 0);
    assert_eq!(engine.speed_wpm(), EngineConfig::default().min_wpm);

    engine.set_speed(u16::MAX, 0);
    assert_eq!(engine.speed_wpm(), EngineConfig::default().max_wpm);
}

#[test]
fn initial_speed_is_clamped_too() {
    let engine = engine_at(0);
    assert_eq!(engine.speed_wpm(), EngineConfig::default().min_wpm);
}

#[test]
fn wpm_to_ms_conversion() {
    assert_eq!(wpm_to_ms(60), 1_000);
    assert_eq!(wpm_to_ms(300), 200);
    assert_eq!(wpm_to_ms(1), 60_000);
    // zero is guarded, never a division by zero
    assert_eq!(wpm_to_ms(0), 60_000);
}

#[test]
fn runs_headless_with_the_null_render() {
    let mut engine = PlaybackEngine::new(crate::render::NullRender::new(), (), EngineConfig {
        wpm: 60,
        ..EngineConfig::default()
    });

    engine.load_text("a b");
    engine.start(0);
    assert_eq!(engine.tick(1_000), TickResult::Advanced);
    assert_eq!(engine.tick(2_000), TickResult::Finished);
}

#[test]
fn state_names_are_stable() {
    assert_eq!(PlaybackState::Idle.as_str(), "idle");
    assert_eq!(PlaybackState::Playing.as_str(), "playing");
    assert_eq!(PlaybackState::Paused.as_str(), "paused");
    assert_eq!(PlaybackState::Finished.as_str(), "finished");
}
