use harold_core::types::{FPS_SANITY_LIMIT, TICK_MS};

/// Frame counter and pacing helper.
///
/// Times are plain milliseconds supplied by the caller so the clock can be
/// driven from `Instant` in the binary and from fixed values in tests.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start_ms: u64,
    frames: u64,
    frame_start_ms: u64,
}

impl FrameClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            start_ms,
            frames: 0,
            frame_start_ms: start_ms,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mark the start of a new frame.
    pub fn begin_frame(&mut self, now_ms: u64) {
        self.frame_start_ms = now_ms;
    }

    /// Mark the end of a frame and return how long to sleep to hold the
    /// target rate.
    pub fn end_frame(&mut self, now_ms: u64) -> u64 {
        self.frames += 1;
        let spent = now_ms.saturating_sub(self.frame_start_ms);
        u64::from(TICK_MS).saturating_sub(spent)
    }

    /// Frames completed per second since the clock started.
    ///
    /// Absurd readings (a near-zero elapsed time) are reported as 0.
    pub fn average_fps(&self, now_ms: u64) -> f32 {
        let elapsed_s = now_ms.saturating_sub(self.start_ms) as f32 / 1000.0;
        if elapsed_s <= 0.0 {
            return 0.0;
        }
        let fps = self.frames as f32 / elapsed_s;
        if fps > FPS_SANITY_LIMIT {
            0.0
        } else {
            fps
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_over_elapsed_time() {
        let mut clock = FrameClock::new(1_000);
        for i in 0..30 {
            clock.begin_frame(1_000 + i * 33);
            clock.end_frame(1_000 + i * 33 + 5);
        }
        assert_eq!(clock.frames(), 30);
        assert!((clock.average_fps(2_000) - 30.0).abs() < 1e-3);
    }

    #[test]
    fn no_elapsed_time_reads_zero() {
        let mut clock = FrameClock::new(500);
        clock.end_frame(500);
        assert_eq!(clock.average_fps(500), 0.0);
    }

    #[test]
    fn sleeps_for_the_rest_of_the_tick() {
        let mut clock = FrameClock::new(0);
        clock.begin_frame(100);
        assert_eq!(clock.end_frame(104), u64::from(TICK_MS) - 4);

        clock.begin_frame(200);
        assert_eq!(clock.end_frame(260), 0);
    }
}
