/// Current drawable size in physical pixels.
///
/// Mutated only by resize handling; read when setting the GL viewport and when
/// formatting the FPS title.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `(x, y, width, height)` as GL viewport arguments.
    ///
    /// Dimensions beyond `i32::MAX` saturate.
    pub fn gl_rect(self) -> (i32, i32, i32, i32) {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0, 0, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gl_rect_is_anchored_at_origin() {
        assert_eq!(Viewport::new(1024, 768).gl_rect(), (0, 0, 1024, 768));
    }

    #[test]
    fn gl_rect_saturates() {
        assert_eq!(Viewport::new(u32::MAX, 1).gl_rect(), (0, 0, i32::MAX, 1));
    }

    #[test]
    fn is_empty_on_zero_axis() {
        assert!(Viewport::new(0, 600).is_empty());
        assert!(Viewport::new(800, 0).is_empty());
        assert!(!Viewport::new(800, 600).is_empty());
    }
}
