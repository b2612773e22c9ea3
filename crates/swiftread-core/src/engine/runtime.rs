impl<R, O> PlaybackEngine<R, O>
where
    R: RenderSink,
    O: PlaybackObserver,
{
    /// Replace the loaded text, tokenizing on runs of whitespace.
    ///
    /// Interrupts any in-progress playback: position returns to 0, the
    /// deadline is cleared, state returns to [`PlaybackState::Idle`], and
    /// the first word (if any) is displayed immediately.
    pub fn load_text(&mut self, text: &str) {
        self.set_words(tokenize(text));
    }

    /// Replace the loaded text with a pre-tokenized sequence. Empty tokens
    /// are dropped, matching the [`load_text`](Self::load_text) contract.
    pub fn load_words<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.set_words(words.into_iter().filter(|word| !word.is_empty()).collect());
    }

    /// Update the playback speed, clamped into the configured bounds.
    ///
    /// While playing, the pending deadline is rebased to
    /// `now_ms + interval` so the new rate takes effect without losing the
    /// current word or skipping ahead. In any other state only the stored
    /// speed changes; no deadline is armed.
    pub fn set_speed(&mut self, wpm: u16, now_ms: u64) {
        self.config.wpm = self.clamp_wpm(wpm);

        if self.state == PlaybackState::Playing && self.next_word_ms.is_some() {
            self.next_word_ms = Some(now_ms + u64::from(self.interval_ms()));
        }
    }

    /// Begin or resume playback. No-op when no words are loaded.
    ///
    /// From [`PlaybackState::Paused`] this resumes at the current position
    /// and redisplays the current word immediately; from any other state it
    /// restarts at the first word.
    pub fn start(&mut self, now_ms: u64) {
        if self.words.is_empty() {
            return;
        }

        if self.state != PlaybackState::Paused {
            self.position = 0;
        }

        self.state = PlaybackState::Playing;
        self.observer.state_changed(self.state);
        self.show_current_word();
        self.next_word_ms = Some(now_ms + u64::from(self.interval_ms()));
        debug!("playing from word {} at {} wpm", self.position, self.config.wpm);
    }

    /// Suspend playback, keeping position and the displayed word. No-op
    /// unless currently playing.
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }

        self.next_word_ms = None;
        self.state = PlaybackState::Paused;
        self.observer.state_changed(self.state);
        debug!("paused at word {}", self.position);
    }

    /// Return to the first word and [`PlaybackState::Idle`], redisplaying it
    /// (or clearing the display when no words are loaded).
    pub fn reset(&mut self) {
        self.next_word_ms = None;
        self.position = 0;
        self.state = PlaybackState::Idle;
        self.observer.state_changed(self.state);
        self.show_current_word();
    }

    /// Advance if the armed deadline has elapsed. Inert in every other
    /// situation, including ticks that arrive after the deadline was
    /// cleared by `pause`/`reset`/`load_*`.
    ///
    /// Advances at most one word per call. Reaching the end of the sequence
    /// clears the deadline and transitions to [`PlaybackState::Finished`],
    /// which is terminal until `start`, `reset`, or a load intervenes.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.state != PlaybackState::Playing {
            return TickResult::NoChange;
        }
        let Some(deadline) = self.next_word_ms else {
            return TickResult::NoChange;
        };
        if now_ms < deadline {
            return TickResult::NoChange;
        }

        self.position += 1;

        if self.position >= self.words.len() {
            self.next_word_ms = None;
            self.state = PlaybackState::Finished;
            self.observer.state_changed(self.state);
            debug!("finished after {} words", self.words.len());
            return TickResult::Finished;
        }

        self.show_current_word();
        self.next_word_ms = Some(now_ms + u64::from(self.interval_ms()));
        TickResult::Advanced
    }

    fn set_words(&mut self, words: Vec<String>) {
        self.words = words;
        self.position = 0;
        self.next_word_ms = None;
        self.state = PlaybackState::Idle;
        debug!("loaded {} words", self.words.len());

        self.show_current_word();
        self.observer.state_changed(self.state);
    }

    fn show_current_word(&mut self) {
        match self.words.get(self.position) {
            Some(word) => {
                self.renderer.render(word);
                self.observer.word_shown(word);
            }
            None => self.renderer.clear(),
        }
    }

    fn interval_ms(&self) -> u32 {
        wpm_to_ms(self.config.wpm)
    }

    fn clamp_wpm(&self, wpm: u16) -> u16 {
        wpm.clamp(self.config.min_wpm.max(1), self.config.max_wpm)
    }
}
