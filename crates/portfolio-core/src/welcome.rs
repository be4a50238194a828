//! Welcome screen timing.
//!
//! The intro shows for a fixed loading period, plays an exit transition, then
//! hands over to the landing page. The tagline is typed out one character
//! per tick.

use std::time::Duration;

pub const LOADING_DURATION: Duration = Duration::from_millis(4000);
pub const EXIT_DURATION: Duration = Duration::from_millis(1000);
pub const TAGLINE_TICK: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomePhase {
    Loading,
    Exiting,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WelcomeTimeline {
    pub loading: Duration,
    pub exit: Duration,
}

impl Default for WelcomeTimeline {
    fn default() -> Self {
        Self {
            loading: LOADING_DURATION,
            exit: EXIT_DURATION,
        }
    }
}

impl WelcomeTimeline {
    /// A timeline that is already finished (`--skip-welcome`).
    pub fn skipped() -> Self {
        Self {
            loading: Duration::ZERO,
            exit: Duration::ZERO,
        }
    }

    pub fn total(&self) -> Duration {
        self.loading + self.exit
    }

    pub fn phase_at(&self, elapsed: Duration) -> WelcomePhase {
        if elapsed < self.loading {
            WelcomePhase::Loading
        } else if elapsed < self.total() {
            WelcomePhase::Exiting
        } else {
            WelcomePhase::Done
        }
    }
}

/// Reveals `text` one character per [`Typewriter::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
    finished: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
            finished: false,
        }
    }

    /// Advance one step. Yields the empty prefix first and the full text
    /// last, then `None` from then on.
    pub fn tick(&mut self) -> Option<&str> {
        let total = self.text.chars().count();
        if self.finished || self.shown > total {
            self.finished = true;
            return None;
        }
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len());
        self.shown += 1;
        Some(&self.text[..end])
    }

    /// Text shown after the most recent tick.
    pub fn visible(&self) -> &str {
        let chars = self.shown.saturating_sub(1);
        let end = self
            .text
            .char_indices()
            .nth(chars)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn is_finished(&self) -> bool {
        self.finished || self.shown > self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_phases() {
        let timeline = WelcomeTimeline::default();
        assert_eq!(timeline.phase_at(Duration::ZERO), WelcomePhase::Loading);
        assert_eq!(timeline.phase_at(Duration::from_millis(3999)), WelcomePhase::Loading);
        assert_eq!(timeline.phase_at(Duration::from_millis(4000)), WelcomePhase::Exiting);
        assert_eq!(timeline.phase_at(Duration::from_millis(5000)), WelcomePhase::Done);
    }

    #[test]
    fn skipped_timeline_is_done_immediately() {
        assert_eq!(
            WelcomeTimeline::skipped().phase_at(Duration::ZERO),
            WelcomePhase::Done
        );
    }

    #[test]
    fn typewriter_reveals_characters() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.tick(), Some(""));
        assert_eq!(tw.tick(), Some("a"));
        assert_eq!(tw.tick(), Some("ab"));
        assert_eq!(tw.tick(), Some("abc"));
        assert!(tw.is_finished());
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn typewriter_handles_multibyte() {
        let mut tw = Typewriter::new("A • B");
        let frames: Vec<String> = std::iter::from_fn(|| tw.tick().map(str::to_string)).collect();
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[3], "A •");
        assert_eq!(frames[5], "A • B");
    }
}
