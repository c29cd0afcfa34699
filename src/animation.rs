//! Count-up animation for the displayed total.
//!
//! [`CountUp`] is a pure description of the animation: given how much time
//! has passed it says what integer to show. [`spawn_count_up`] drives it on
//! the tokio runtime and streams frames back to the event loop until the
//! duration elapses or the returned handle is cancelled.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time;

/// Linear interpolation from `start` to `end` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
}

impl CountUp {
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    /// Fraction of the animation completed, clamped to `0.0..=1.0`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Integer to display after `elapsed`.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let value = (self.progress(elapsed) * (self.end - self.start) + self.start).floor();
        // Saturating float-to-int cast; negative and NaN become 0.
        value as u64
    }

    /// Value shown once the animation has finished.
    pub fn final_value(&self) -> u64 {
        self.value_at(self.duration)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Lazily yields the displayed value at every `interval` step, ending
    /// with the final value.
    pub fn frames(&self, interval: Duration) -> Frames {
        Frames {
            count_up: *self,
            interval,
            step: 0,
            done: false,
        }
    }
}

/// Iterator returned by [`CountUp::frames`].
#[derive(Debug, Clone)]
pub struct Frames {
    count_up: CountUp,
    interval: Duration,
    step: u32,
    done: bool,
}

impl Iterator for Frames {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }

        let elapsed = self.interval.saturating_mul(self.step);
        self.step = self.step.saturating_add(1);

        // A zero interval would never advance; jump straight to the end.
        if self.interval.is_zero() || self.count_up.is_finished(elapsed) {
            self.done = true;
            return Some(self.count_up.final_value());
        }

        Some(self.count_up.value_at(elapsed))
    }
}

/// One rendered step of a running animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Calculation this frame belongs to.
    pub generation: u64,
    pub value: u64,
    /// True for the last frame of the animation.
    pub done: bool,
}

/// Handle to a running count-up task. Dropping it cancels the task.
#[derive(Debug)]
pub struct AnimationHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl AnimationHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stops the task. Frames already sent may still be in the channel.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns a task that sends one frame of [`CountUp::frames`] per
/// `interval` until the sequence ends or the receiving side goes away.
///
/// Late ticks are caught up in a burst, so the last frame still lands
/// close to `duration` after the start.
///
/// Must be called from within a tokio runtime.
pub fn spawn_count_up(
    count_up: CountUp,
    interval: Duration,
    generation: u64,
    frames: UnboundedSender<AnimationFrame>,
) -> AnimationHandle {
    let task = tokio::spawn(async move {
        let mut values = count_up.frames(interval).peekable();
        let mut ticker = time::interval(interval.max(Duration::from_millis(1)));

        while let Some(value) = values.next() {
            ticker.tick().await;
            let done = values.peek().is_none();
            let frame = AnimationFrame {
                generation,
                value,
                done,
            };

            if frames.send(frame).is_err() || done {
                break;
            }
        }
    });

    AnimationHandle { generation, task }
}
