//! Time management for the frame loop.

use std::time::{Duration, Instant};

/// Manages frame timing: delta time plus a millisecond wall clock.
///
/// Two driving modes: `update()` samples the real clock, `advance_fixed()`
/// steps one fixed timestep (headless runs and tests). The wall clock always starts at the
/// `epoch_ms` offset so cooldown arithmetic never sees a zero timestamp.
#[derive(Debug)]
pub struct Time {
    /// Time of the last frame (real-clock mode only).
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
    /// Wall-clock value at elapsed == 0.
    epoch_ms: u64,
    /// Fixed timestep for headless stepping (default 60 Hz).
    fixed_timestep: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            epoch_ms: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / 60.0),
        }
    }

    /// Start the wall clock at a given millisecond value.
    pub fn with_epoch_ms(mut self, epoch_ms: u64) -> Self {
        self.epoch_ms = epoch_ms;
        self
    }

    /// Update timing from the real clock at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.step(now - self.last_frame);
        self.last_frame = now;
    }

    /// Advance by exactly one fixed timestep.
    pub fn advance_fixed(&mut self) {
        self.step(self.fixed_timestep);
    }

    fn step(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Wall-clock timestamp in milliseconds.
    pub fn wall_clock_ms(&self) -> u64 {
        self.epoch_ms + self.elapsed.as_millis() as u64
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Set the fixed timestep rate in Hz.
    pub fn set_fixed_rate(&mut self, hz: f64) {
        self.fixed_timestep = Duration::from_secs_f64(1.0 / hz);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_stepping_accumulates_wall_clock() {
        let mut t = Time::new().with_epoch_ms(5_000);
        t.set_fixed_rate(50.0);
        for _ in 0..50 {
            t.advance_fixed();
        }
        assert_eq!(t.frame_count(), 50);
        assert!((t.delta_seconds() - 0.02).abs() < 1e-6);
        assert!((t.elapsed_seconds() - 1.0).abs() < 1e-4);
        assert!((5_999..=6_000).contains(&t.wall_clock_ms()));
    }

    #[test]
    fn default_rate_is_sixty_hertz() {
        let mut t = Time::new();
        t.advance_fixed();
        assert!((t.delta_seconds() - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(t.wall_clock_ms(), 16);
    }

    #[test]
    fn real_clock_counts_frames() {
        let mut t = Time::new().with_epoch_ms(1_000);
        t.update();
        t.update();
        assert_eq!(t.frame_count(), 2);
        assert!(t.wall_clock_ms() >= 1_000);
    }
}
