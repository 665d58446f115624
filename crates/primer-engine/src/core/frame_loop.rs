use anyhow::Result;

use crate::coords::Viewport;
use crate::device::GlApi;
use crate::time::FrameCounter;

use super::{App, Presenter};

/// What drives the next frame besides the one requested after each present.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RedrawMode {
    /// The idle handler also requests a redraw.
    #[default]
    Continuous,
    /// No idle handler; only presenting a frame requests the next one.
    DisplayOnly,
}

/// Frame loop controller: viewport + frame counter + per-event handlers.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    viewport: Viewport,
    frames: FrameCounter,
    redraw: RedrawMode,
}

impl FrameLoop {
    pub fn new(viewport: Viewport, redraw: RedrawMode) -> Self {
        Self {
            viewport,
            frames: FrameCounter::new(),
            redraw,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn redraw_mode(&self) -> RedrawMode {
        self.redraw
    }

    pub fn frames(&self) -> &FrameCounter {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut FrameCounter {
        &mut self.frames
    }

    /// Stores the new size and points the GL viewport at the whole surface.
    pub fn on_resize<G: GlApi>(&mut self, gl: &G, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        let (x, y, w, h) = self.viewport.gl_rect();
        gl.viewport(x, y, w, h);
    }

    /// Requests exactly one redraw when the idle handler is installed.
    pub fn on_idle<P: Presenter>(&self, presenter: &P) {
        if self.redraw == RedrawMode::Continuous {
            presenter.request_redraw();
        }
    }

    /// Renders and presents one frame.
    ///
    /// Counts the frame, clears color + depth, lets `app` draw, swaps, and
    /// asks for the next frame.
    pub fn on_display<G, P, A>(&mut self, gl: &G, presenter: &P, app: &mut A) -> Result<()>
    where
        G: GlApi,
        P: Presenter,
        A: App<G>,
    {
        self.frames.tick();

        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        app.on_draw(gl);

        presenter.swap_buffers()?;
        presenter.request_redraw();
        Ok(())
    }
}
