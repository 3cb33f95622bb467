use std::{
    thread,
    time::{Duration, Instant},
};

/// Frame pacer. A target of 0 fps never sleeps and only measures frame time.
#[derive(Debug, Clone)]
pub struct Timing {
    fps: u32,
    last_time: Instant,
    frame_time: f64,
}

impl Timing {
    pub fn new(fps: u32) -> Timing {
        Timing {
            fps,
            last_time: Instant::now(),
            frame_time: 0.0,
        }
    }

    /// Sleep for whatever is left of the current frame budget, then start the
    /// next frame.
    pub fn sleep(&mut self) {
        if let Some(remaining) = self.remaining() {
            thread::sleep(remaining);
        }

        self.frame_time = self.last_time.elapsed().as_secs_f64();
        self.last_time = Instant::now();
    }

    /// Time left in the current frame, `None` when unthrottled or already late.
    pub fn remaining(&self) -> Option<Duration> {
        if self.fps == 0 {
            return None;
        }

        let budget = Duration::from_secs_f64(1.0 / self.fps as f64);
        budget.checked_sub(self.last_time.elapsed()).filter(|left| !left.is_zero())
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    /// Duration of the last completed frame, in seconds.
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unthrottled_never_waits() {
        let mut timing = Timing::new(0);

        assert_eq!(timing.remaining(), None);

        let start = Instant::now();
        timing.sleep();
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn throttled_waits_for_budget() {
        let mut timing = Timing::new(50);

        assert!(timing.remaining().is_some());

        timing.sleep();
        timing.sleep();
        assert!(timing.frame_time() >= 0.015);
    }
}
