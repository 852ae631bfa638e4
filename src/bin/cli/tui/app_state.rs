use std::time::{Duration, Instant};

use khmer_drill_lib::sentences::SentenceView;

use crate::app::App;

pub struct TuiState {
    pub app: App,
    pub view: SentenceView,

    // Auto-advance timer
    pub auto_advance: Option<Duration>,
    pub paused: bool,
    pub last_advance: Instant,

    // Session counters
    pub sentences_read: usize,
    pub cycles_completed: usize,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App, now: Instant) -> Self {
        let view = app.rotator.view();
        let auto_advance = app.config.auto_advance_secs.map(Duration::from_secs);

        Self {
            app,
            view,
            auto_advance,
            paused: false,
            last_advance: now,
            sentences_read: 0,
            cycles_completed: 0,
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    /// Show the next sentence, flashing a notice when a new cycle begins
    pub fn advance(&mut self, now: Instant) {
        let wraps = self.app.rotator.remaining_in_cycle() == 0;

        self.view = self.app.next_sentence();
        self.sentences_read += 1;
        self.last_advance = now;

        if wraps {
            self.cycles_completed += 1;
            self.flash_message = Some(format!(
                "All {} sentences shown. Starting a new round.",
                self.view.corpus_len
            ));
        }
    }

    pub fn reset_cycle(&mut self) {
        self.app.rotator.reset_cycle();
        self.view = self.app.rotator.view();
        self.flash_message = Some("Round reset. Every sentence is available again.".to_string());
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        if self.auto_advance.is_none() {
            self.flash_message = Some("Auto-advance is off (set auto_advance_secs)".to_string());
            return;
        }
        self.paused = !self.paused;
        // Resuming restarts the countdown
        self.last_advance = now;
    }

    /// Advance when the auto-advance interval has elapsed
    pub fn tick(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        if let Some(interval) = self.auto_advance {
            if now.duration_since(self.last_advance) >= interval {
                self.advance(now);
            }
        }
    }

    /// Seconds until the next automatic advance, if one is scheduled
    pub fn seconds_until_advance(&self, now: Instant) -> Option<u64> {
        if self.paused {
            return None;
        }
        self.auto_advance.map(|interval| {
            interval
                .saturating_sub(now.duration_since(self.last_advance))
                .as_secs()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Overrides;
    use std::fs;
    use tempfile::TempDir;

    fn state_with(sentences: &str, config: &str) -> (TuiState, TempDir, Instant) {
        let temp = TempDir::new().unwrap();
        let corpus_path = temp.path().join("sentences.txt");
        fs::write(&corpus_path, sentences).unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, config).unwrap();

        let app = App::new(Overrides {
            config_path: Some(config_path),
            corpus_path: Some(corpus_path),
            seed: Some(3),
            avoid_repeat: false,
        })
        .unwrap();

        let now = Instant::now();
        (TuiState::new(app, now), temp, now)
    }

    #[test]
    fn test_starts_on_first_sentence() {
        let (state, _temp, _) = state_with("A\u{200B}\nB\nC\n", "");
        assert_eq!(state.view.index, 0);
        assert_eq!(state.view.text, "A");
        assert_eq!(state.view.shown_this_cycle, 0);
    }

    #[test]
    fn test_flash_on_new_cycle() {
        let (mut state, _temp, now) = state_with("A\nB\n", "");

        state.advance(now);
        state.advance(now);
        assert!(state.flash_message.is_none());
        assert_eq!(state.cycles_completed, 0);

        state.advance(now);
        assert!(state.flash_message.is_some());
        assert_eq!(state.cycles_completed, 1);
        assert_eq!(state.sentences_read, 3);
    }

    #[test]
    fn test_auto_advance_on_tick() {
        let (mut state, _temp, now) = state_with("A\nB\nC\n", "auto_advance_secs = 5\n");

        state.tick(now + Duration::from_secs(4));
        assert_eq!(state.sentences_read, 0);
        assert_eq!(state.seconds_until_advance(now + Duration::from_secs(4)), Some(1));

        state.tick(now + Duration::from_secs(5));
        assert_eq!(state.sentences_read, 1);
    }

    #[test]
    fn test_paused_does_not_advance() {
        let (mut state, _temp, now) = state_with("A\nB\n", "auto_advance_secs = 1\n");

        state.toggle_pause(now);
        state.tick(now + Duration::from_secs(10));
        assert_eq!(state.sentences_read, 0);
        assert_eq!(state.seconds_until_advance(now), None);
    }

    #[test]
    fn test_pause_without_timer_flashes() {
        let (mut state, _temp, now) = state_with("A\nB\n", "");

        state.toggle_pause(now);
        assert!(!state.paused);
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn test_reset_cycle_clears_progress() {
        let (mut state, _temp, now) = state_with("A\nB\nC\n", "");

        state.advance(now);
        state.advance(now);
        state.reset_cycle();
        assert_eq!(state.view.shown_this_cycle, 0);
        assert_eq!(state.app.rotator.remaining_in_cycle(), 3);
    }
}
