//! Variable-step frame timing.
//!
//! The camera and the thrown cube both advance by the wall-clock time since
//! the previous frame. Overlong frames (debugger pauses, window drags) are
//! clamped so the cube cannot tunnel through the ground in one step.

use std::time::Instant;
use tracing::warn;

/// Longest frame accepted, in seconds.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Measures the elapsed time between consecutive frames.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    previous: Instant,
    frame_count: u64,
    total_time: f64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Start timing from now.
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
            frame_count: 0,
            total_time: 0.0,
        }
    }

    /// Seconds since the previous call (or construction), clamped.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.previous).as_secs_f64();
        self.previous = now;
        self.tick_with(elapsed)
    }

    /// Account for a frame of a known length and return the clamped delta.
    pub fn tick_with(&mut self, frame_time: f64) -> f32 {
        let mut dt = frame_time.max(0.0);
        if dt > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                dt * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            dt = MAX_FRAME_TIME;
        }
        self.total_time += dt;
        self.frame_count += 1;
        dt as f32
    }

    /// Frames timed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Sum of all clamped deltas, in seconds.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_with_passes_normal_frames() {
        let mut timer = FrameTimer::new();
        let dt = timer.tick_with(1.0 / 60.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(timer.frame_count(), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut timer = FrameTimer::new();
        let dt = timer.tick_with(2.0);
        assert!((f64::from(dt) - MAX_FRAME_TIME).abs() < 1e-7);
        assert!((timer.total_time() - MAX_FRAME_TIME).abs() < 1e-12);
    }

    #[test]
    fn test_negative_frame_is_zero() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick_with(-0.5), 0.0);
    }

    #[test]
    fn test_total_time_accumulates() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            timer.tick_with(0.02);
        }
        assert_eq!(timer.frame_count(), 10);
        assert!((timer.total_time() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_wall_clock_tick_is_bounded() {
        let mut timer = FrameTimer::new();
        let dt = timer.tick();
        assert!(dt >= 0.0);
        assert!(f64::from(dt) <= MAX_FRAME_TIME);
    }
}
