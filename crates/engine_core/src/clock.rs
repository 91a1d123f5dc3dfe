//! Frame timing for the host loop.

use std::time::{Duration, Instant};

/// Tracks elapsed wall-clock time and paces fixed-rate animation ticks.
///
/// The host calls [`Clock::tick`] once per loop iteration, then drains
/// [`Clock::should_step`] to run the accumulated animation ticks. Elapsed
/// time is monotonic; restarting the clock restarts the animation phase of
/// anything derived from it.
#[derive(Debug)]
pub struct Clock {
    /// When the clock was created.
    started: Instant,
    /// Time of the previous `tick` call.
    last_tick: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since creation.
    elapsed: Duration,
    /// Number of `tick` calls so far.
    ticks: u64,
    /// Fixed step length for animation updates.
    step: Duration,
    /// Unconsumed time carried toward the next fixed step.
    accumulator: Duration,
}

impl Clock {
    /// Create a clock stepping at the given rate in Hz.
    pub fn new(rate_hz: f64) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            ticks: 0,
            step: Duration::from_secs_f64(1.0 / rate_hz),
            accumulator: Duration::ZERO,
        }
    }

    /// Sample the wall clock at the top of a host-loop iteration.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_tick;
        self.last_tick = now;
        self.elapsed = now - self.started;
        self.ticks += 1;
        self.accumulator += self.delta;
    }

    /// Duration of the last frame in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds since the clock was created.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Number of `tick` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Fixed step length in seconds.
    pub fn step_seconds(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// True while accumulated time covers another fixed step; consumes it.
    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.step {
            self.accumulator -= self.step;
            true
        } else {
            false
        }
    }
}
