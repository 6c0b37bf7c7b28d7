//! Stat Counter Animation
//!
//! Counts a statistic up from zero to its target in fixed frames, then
//! shows the target with a `+` suffix.

/// Frame interval in milliseconds (~60 fps)
pub const FRAME_MS: u32 = 16;

/// Default time to reach the target
pub const DEFAULT_DURATION_MS: u32 = 2000;

/// Extract the number to count up to from a stat's text ("1,200+" -> 1200)
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// One rendered frame of the counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Frame-by-frame count-up state for a single stat element
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(FRAME_MS);
        let increment = if frames > 0.0 {
            target as f64 / frames
        } else {
            target as f64
        };

        Self {
            target,
            increment,
            current: 0.0,
            done: false,
        }
    }

    /// Counter for the text currently shown in a stat element, if it holds a
    /// number
    pub fn from_text(text: &str) -> Option<Self> {
        parse_target(text).map(|target| Self::new(target, DEFAULT_DURATION_MS))
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame. Once done, keeps returning the final frame.
    pub fn tick(&mut self) -> CounterFrame {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.done = true;
            }
        }

        if self.done {
            CounterFrame {
                text: format!("{}+", self.target),
                done: true,
            }
        } else {
            CounterFrame {
                text: format!("{}", self.current.floor() as u64),
                done: false,
            }
        }
    }
}
