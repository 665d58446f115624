/// Frames presented since the last FPS report.
///
/// Owned by the frame loop; ticked once per render and drained by the
/// reporter every period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameCounter {
    count: u64,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one presented frame.
    #[inline]
    pub fn tick(&mut self) {
        self.count = self.count.wrapping_add(1);
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the accumulated count and resets it to zero.
    pub fn take(&mut self) -> u64 {
        std::mem::take(&mut self.count)
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
