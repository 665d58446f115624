use std::time::Duration;

use crate::coords::Viewport;

use super::FrameCounter;

/// Phase carried by each timer callback.
///
/// The first callback is registered as `Bootstrap`; every one after it is
/// `Steady`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerTag {
    Bootstrap,
    Steady,
}

/// A timer callback to schedule after the current one returns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimerRequest {
    pub delay: Duration,
    pub tag: TimerTag,
}

/// Result of one timer callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FpsReport {
    /// New window title, `None` for the bootstrap callback.
    pub title: Option<String>,
    /// Estimated frames per second, `None` for the bootstrap callback.
    pub fps: Option<u64>,
    /// The callback that replaces this one. There is always exactly one.
    pub next: TimerRequest,
}

/// Periodic FPS title reporter.
///
/// Frames counted during one period are scaled to a per-second rate using the
/// *nominal* period (`frames * 1000ms / period`), so a 250 ms period reports
/// exactly four times the sampled count. The actual elapsed time between
/// callbacks is not consulted: a platform with coarse timers will report a
/// skewed rate.
#[derive(Debug, Clone)]
pub struct FpsReporter {
    title: String,
    period: Duration,
}

impl FpsReporter {
    pub const DEFAULT_PERIOD: Duration = Duration::from_millis(250);

    pub fn new(title: impl Into<String>, period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "FPS report period must be non-zero");
        Self {
            title: title.into(),
            period,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// The first callback, registered once when rendering starts.
    pub fn bootstrap(&self) -> TimerRequest {
        TimerRequest {
            delay: Duration::ZERO,
            tag: TimerTag::Bootstrap,
        }
    }

    /// Scales a per-period frame count to frames per second.
    pub fn fps_for(&self, frames: u64) -> u64 {
        let period_ms = self.period.as_millis().max(1);
        let fps = u128::from(frames) * 1000 / period_ms;
        u64::try_from(fps).unwrap_or(u64::MAX)
    }

    /// Formats `"<title>: <fps> FPS @ <width> x <height>"`.
    pub fn format_title(&self, fps: u64, viewport: Viewport) -> String {
        format!(
            "{}: {} FPS @ {} x {}",
            self.title, fps, viewport.width, viewport.height
        )
    }

    /// Handles one timer callback.
    ///
    /// Bootstrap resets the counter without reporting and asks to be replaced
    /// by a steady callback right away. Steady drains the counter into a title
    /// and reschedules itself one period later.
    pub fn on_timer(
        &self,
        tag: TimerTag,
        frames: &mut FrameCounter,
        viewport: Viewport,
    ) -> FpsReport {
        match tag {
            TimerTag::Bootstrap => {
                frames.reset();
                FpsReport {
                    title: None,
                    fps: None,
                    next: TimerRequest {
                        delay: Duration::ZERO,
                        tag: TimerTag::Steady,
                    },
                }
            }
            TimerTag::Steady => {
                let fps = self.fps_for(frames.take());
                FpsReport {
                    title: Some(self.format_title(fps, viewport)),
                    fps: Some(fps),
                    next: TimerRequest {
                        delay: self.period,
                        tag: TimerTag::Steady,
                    },
                }
            }
        }
    }
}
