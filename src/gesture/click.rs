//! Multi-tap counting.
//!
//! A tap counts toward a multi-tap sequence if:
//! - it occurs within the tap interval of the previous tap
//! - it is within `slop` cells of the previous tap position
//!
//! Otherwise the count restarts at 1.

use std::time::{Duration, Instant};

use ratatui::layout::Position;

/// Default time window between taps of one sequence.
pub const DEFAULT_TAP_INTERVAL: Duration = Duration::from_millis(300);

/// Default maximum distance (in cells) between taps of one sequence.
pub const DEFAULT_TAP_SLOP: u16 = 3;

/// Tracks consecutive taps to detect double (or longer) taps.
#[derive(Debug, Clone)]
pub struct TapCounter {
    interval: Duration,
    slop: u16,
    last_position: Option<Position>,
    last_time: Option<Instant>,
    count: u8,
}

impl Default for TapCounter {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_INTERVAL, DEFAULT_TAP_SLOP)
    }
}

impl TapCounter {
    pub fn new(interval: Duration, slop: u16) -> Self {
        Self {
            interval,
            slop,
            last_position: None,
            last_time: None,
            count: 0,
        }
    }

    /// Register a tap now and return the count of the current sequence.
    pub fn register_tap(&mut self, position: Position) -> u8 {
        self.register_tap_at(position, Instant::now())
    }

    /// Register a tap at `now` and return the count of the current sequence.
    pub fn register_tap_at(&mut self, position: Position, now: Instant) -> u8 {
        if self.continues_sequence(position, now) {
            self.count = self.count.saturating_add(1);
        } else {
            self.count = 1;
        }
        self.last_position = Some(position);
        self.last_time = Some(now);
        self.count
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn reset(&mut self) {
        self.last_position = None;
        self.last_time = None;
        self.count = 0;
    }

    fn continues_sequence(&self, position: Position, now: Instant) -> bool {
        match (self.last_position, self.last_time) {
            (Some(last_pos), Some(last_time)) => {
                if now.saturating_duration_since(last_time) > self.interval {
                    return false;
                }
                self.is_position_close(position, last_pos)
            }
            _ => false,
        }
    }

    fn is_position_close(&self, a: Position, b: Position) -> bool {
        a.x.abs_diff(b.x) <= self.slop && a.y.abs_diff(b.y) <= self.slop
    }
}
