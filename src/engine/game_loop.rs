// Frame timing for the demo loop
//
// The simulation is elapsed-time driven: each frame advances physics by the
// real wall-clock time since the previous frame, rather than by a fixed
// accumulator. The clock's baseline is taken at construction, so the very
// first frame's delta covers the time between world creation and the first
// redraw, not zero.

use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Wall-clock bookkeeping for per-frame stepping
pub struct FrameClock {
    /// Timestamp of the last tick (baseline = construction time)
    last_tick: Instant,

    /// Time when the clock was created
    start_time: Instant,

    /// Frames ticked so far
    frame_count: u64,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    /// Create a new clock with the baseline set to now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: now,
            start_time: now,
            frame_count: 0,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            current_fps: 0.0,
        }
    }

    /// Advance the clock to the current instant and return the elapsed
    /// seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now` and return the elapsed seconds since the
    /// previous tick. The delta is never negative: `Instant` differences
    /// saturate to zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let frame_time = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        frame_time.as_secs_f32()
    }

    /// Timestamp stored by the most recent tick
    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Total number of frames ticked
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since the clock was created
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
