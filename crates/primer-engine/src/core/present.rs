use anyhow::Result;

/// Window-side capabilities the frame loop and FPS reporter rely on.
pub trait Presenter {
    /// Presents the back buffer.
    fn swap_buffers(&self) -> Result<()>;

    /// Asks the provider for one more display callback.
    fn request_redraw(&self);

    fn set_title(&self, title: &str);
}
