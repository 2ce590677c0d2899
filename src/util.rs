//! Frame timing helpers for the demo loop

use std::collections::VecDeque;
use std::time::Instant;

/// FPS counter with rolling average
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
}

impl FpsCounter {
    /// Create a new FPS counter with specified sample window
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count: sample_count.max(1),
        }
    }

    /// Call once per presented frame.
    /// Returns (delta_time, average_fps)
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(dt);
        (dt, self.avg_fps())
    }

    fn record(&mut self, dt: f32) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
    }

    fn avg_dt(&self) -> f32 {
        self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32
    }

    pub fn avg_fps(&self) -> f32 {
        let avg_dt = self.avg_dt();
        if avg_dt > 0.0 {
            1.0 / avg_dt
        } else {
            0.0
        }
    }

    /// Get the average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        self.avg_dt() * 1000.0
    }
}

/// Fixed-timestep accumulator: converts wall-clock time into whole update steps
pub struct StepClock {
    step: f32,
    accumulator: f32,
    last: Instant,
}

impl StepClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            last: Instant::now(),
        }
    }

    /// Number of update steps owed since the previous call
    pub fn advance(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = (now - self.last).as_secs_f32();
        self.last = now;
        self.accumulate(elapsed)
    }

    fn accumulate(&mut self, elapsed: f32) -> u32 {
        // Cap the backlog so a stalled frame does not trigger a long catch-up burst
        self.accumulator = (self.accumulator + elapsed).min(self.step * 8.0);
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}
