//! Frame-time tracking for the FPS readout

use bevy::prelude::*;
use std::time::{Duration, Instant};

/// Number of frame samples to keep (2 seconds of data at 60 FPS)
const MAX_FRAME_SAMPLES: usize = 120;

/// Resource tracking recent frame times
#[derive(Resource, Default)]
pub struct FrameStats {
    /// Frame times over the last N frames
    frame_times: Vec<Duration>,
    /// Last frame start time
    last_frame_start: Option<Instant>,
}

impl FrameStats {
    /// Record a frame time
    fn record_frame_time(&mut self, duration: Duration) {
        self.frame_times.push(duration);

        // Keep only the last N samples
        if self.frame_times.len() > MAX_FRAME_SAMPLES {
            self.frame_times.remove(0);
        }
    }

    /// Get average frame time over the sample window
    pub fn average_frame_time(&self) -> Option<Duration> {
        if self.frame_times.is_empty() {
            return None;
        }

        let total: Duration = self.frame_times.iter().sum();
        Some(total / self.frame_times.len() as u32)
    }

    /// Frames per second derived from the average frame time
    pub fn fps(&self) -> Option<f64> {
        self.average_frame_time().map(|t| 1.0 / t.as_secs_f64())
    }
}

/// System to track frame times
pub fn track_frame_times(mut stats: ResMut<FrameStats>) {
    let now = Instant::now();

    if let Some(last_start) = stats.last_frame_start {
        let frame_time = now.duration_since(last_start);
        stats.record_frame_time(frame_time);
    }

    stats.last_frame_start = Some(now);
}

/// System to log the frame rate periodically
pub fn log_frame_stats(stats: Res<FrameStats>, mut timer: Local<Option<Timer>>, time: Res<Time>) {
    // Initialize timer on first run
    let timer = timer.get_or_insert_with(|| Timer::from_seconds(5.0, TimerMode::Repeating));

    timer.tick(time.delta());

    if timer.just_finished() {
        if let Some(fps) = stats.fps() {
            info!("Performance: {:.1} FPS", fps);
        }
    }
}
