use crate::device::{GlApi, GlError};

/// Application contract implemented by the chapter programs.
///
/// Registered once with the runtime; every callback runs on the event loop
/// thread with the GL context current.
pub trait App<G: GlApi> {
    /// Called once after the context is ready, before the first frame.
    fn on_init(&mut self, gl: &G) -> Result<(), GlError> {
        let _ = gl;
        Ok(())
    }

    /// Called once per rendered frame, between clear and swap.
    fn on_draw(&mut self, gl: &G);

    /// Called once when the window closes. Must release everything `on_init`
    /// acquired.
    fn on_close(&mut self, gl: &G) -> Result<(), GlError> {
        let _ = gl;
        Ok(())
    }
}

/// Draws nothing; frames are clear + swap only.
#[derive(Debug, Default, Copy, Clone)]
pub struct Blank;

impl<G: GlApi> App<G> for Blank {
    fn on_draw(&mut self, _gl: &G) {}
}
