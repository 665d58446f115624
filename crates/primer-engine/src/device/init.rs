/// Context and surface parameters for the GL layer.
///
/// Keep this structure small. Add flags only when a concrete platform or
/// driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Minimum OpenGL version `(major, minor)` requested from the driver.
    pub version: (u8, u8),

    /// Request a core profile (no deprecated fixed-function entry points).
    ///
    /// Forward compatibility is set by glutin where the platform requires it
    /// for core contexts.
    pub core_profile: bool,

    /// Depth buffer bits on the window framebuffer.
    pub depth_bits: u8,

    /// Sync buffer swaps to the display refresh.
    ///
    /// Off by default so the FPS title shows the raw render rate.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (4, 0),
            core_profile: true,
            depth_bits: 24,
            vsync: false,
        }
    }
}
