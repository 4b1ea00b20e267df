//! Typing animation for the home page
//!
//! A single animator types a quote one character at a time, dwells, deletes
//! it again, dwells, and moves on to the next quote, wrapping forever.
//! [`TypingAnimator::tick`] advances the state machine by one step and
//! reports how long to wait before the next one; [`TypingAnimator::run`]
//! drives it with tokio timers.

use std::time::Duration;
use thiserror::Error;

use crate::config::TypingConfig;

/// Invalid quote list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypingError {
    #[error("no quotes to animate")]
    NoQuotes,

    #[error("quote {0} is empty")]
    EmptyQuote(usize),
}

/// Which way the current quote is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Cursor state of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub quote_index: usize,
    /// Characters of the current quote on screen
    pub char_index: usize,
    pub phase: Phase,
    /// Set while dwelling at either end of a quote
    pub paused: bool,
}

/// What to show after a tick and how long until the next one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
    /// The delay is a dwell; call [`TypingAnimator::resume`] once it elapses
    pub dwell: bool,
}

/// Element the animation writes into
pub trait TextSink {
    fn show(&mut self, text: &str);
}

pub struct TypingAnimator {
    quotes: Vec<Vec<char>>,
    state: AnimationState,
    config: TypingConfig,
}

impl TypingAnimator {
    /// Create an animator over `config.quotes`
    pub fn new(config: TypingConfig) -> Result<Self, TypingError> {
        if config.quotes.is_empty() {
            return Err(TypingError::NoQuotes);
        }
        if let Some(i) = config.quotes.iter().position(|q| q.is_empty()) {
            return Err(TypingError::EmptyQuote(i));
        }

        let quotes = config.quotes.iter().map(|q| q.chars().collect()).collect();

        Ok(Self {
            quotes,
            state: AnimationState {
                quote_index: 0,
                char_index: 0,
                phase: Phase::Typing,
                paused: false,
            },
            config,
        })
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Advance one character. Returns `None` while dwelling.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.state.paused {
            return None;
        }

        let len = self.quotes[self.state.quote_index].len();

        let (delay, dwell) = match self.state.phase {
            Phase::Typing => {
                self.state.char_index += 1;
                if self.state.char_index == len {
                    self.state.phase = Phase::Deleting;
                    self.state.paused = true;
                    (self.config.typing_dwell(), true)
                } else {
                    (self.config.typing_interval(), false)
                }
            }
            Phase::Deleting => {
                self.state.char_index -= 1;
                if self.state.char_index == 0 {
                    self.state.phase = Phase::Typing;
                    self.state.quote_index = (self.state.quote_index + 1) % self.quotes.len();
                    self.state.paused = true;
                    (self.config.deleting_dwell(), true)
                } else {
                    (self.config.deleting_interval(), false)
                }
            }
        };

        // After wrapping to the next quote nothing is on screen, so an empty
        // prefix of whichever quote is current is correct
        let text = self.quotes[self.state.quote_index]
            .iter()
            .take(self.state.char_index)
            .collect();

        Some(Frame { text, delay, dwell })
    }

    /// End a dwell
    pub fn resume(&mut self) {
        self.state.paused = false;
    }

    /// Drive the animation with timers.
    ///
    /// Runs forever when `cycles` is `None`; otherwise returns once that many
    /// quotes have been typed and deleted. `Some(0)` returns at once.
    pub async fn run<S: TextSink>(&mut self, sink: &mut S, cycles: Option<usize>) {
        if cycles == Some(0) {
            return;
        }

        tokio::time::sleep(self.config.start_delay()).await;

        let mut completed = 0;
        loop {
            let Some(frame) = self.tick() else {
                // Only reachable if a caller left the animator paused
                self.resume();
                continue;
            };

            sink.show(&frame.text);
            tokio::time::sleep(frame.delay).await;

            if frame.dwell {
                self.resume();
                if self.state.phase == Phase::Typing {
                    completed += 1;
                    tracing::debug!("Finished quote cycle {}", completed);
                    if cycles.is_some_and(|limit| completed >= limit) {
                        return;
                    }
                }
            }
        }
    }
}
