use std::time::Instant;

use anyhow::Result;

use crate::coords::Viewport;
use crate::device::GlApi;
use crate::time::{FpsReporter, TimerRequest, TimerSlot, TimerTag};
use crate::window::RuntimeConfig;

use super::{App, FrameLoop, Lifecycle, Presenter};

/// Owned state of one window: lifecycle, frame loop, FPS reporter and app.
///
/// The runtime forwards provider events here; nothing in this type touches
/// the windowing system directly, so a test can drive it with fakes.
pub struct Session<A> {
    lifecycle: Lifecycle,
    frame_loop: FrameLoop,
    reporter: Option<FpsReporter>,
    clear_color: [f32; 4],
    app: A,
}

impl<A> Session<A> {
    pub fn new(config: &RuntimeConfig, app: A) -> Self {
        let size = config.initial_size.to_physical::<u32>(1.0);
        let reporter = config
            .fps_title
            .then(|| FpsReporter::new(config.title.clone(), config.report_period));

        Self {
            lifecycle: Lifecycle::Uninitialized,
            frame_loop: FrameLoop::new(Viewport::new(size.width, size.height), config.redraw),
            reporter,
            clear_color: config.clear_color,
            app,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn window_created(&mut self) -> Result<()> {
        self.lifecycle.advance(Lifecycle::WindowCreated)?;
        Ok(())
    }

    /// Reports the driver version and sets the clear color.
    pub fn context_ready<G: GlApi>(&mut self, gl: &G) -> Result<()> {
        let version = gl.version();
        log::info!("OpenGL version: {version}");

        let [r, g, b, a] = self.clear_color;
        gl.clear_color(r, g, b, a);

        self.lifecycle.advance(Lifecycle::ContextReady)?;
        Ok(())
    }

    /// Creates the app's GPU resources and enters `Running`.
    ///
    /// Returns the first timer callback to arm when the FPS title is enabled.
    pub fn start<G>(&mut self, gl: &G) -> Result<Option<TimerRequest>>
    where
        G: GlApi,
        A: App<G>,
    {
        self.app.on_init(gl)?;
        self.lifecycle.advance(Lifecycle::ResourcesCreated)?;
        self.lifecycle.advance(Lifecycle::Running)?;
        Ok(self.reporter.as_ref().map(FpsReporter::bootstrap))
    }

    pub fn resize<G: GlApi>(&mut self, gl: &G, width: u32, height: u32) {
        self.frame_loop.on_resize(gl, width, height);
    }

    pub fn idle<P: Presenter>(&self, presenter: &P) {
        if self.is_running() {
            self.frame_loop.on_idle(presenter);
        }
    }

    /// Renders one frame; display requests outside `Running` are dropped.
    pub fn display<G, P>(&mut self, gl: &G, presenter: &P) -> Result<()>
    where
        G: GlApi,
        P: Presenter,
        A: App<G>,
    {
        if !self.is_running() {
            return Ok(());
        }
        self.frame_loop.on_display(gl, presenter, &mut self.app)
    }

    /// Runs the FPS reporter for one timer callback.
    ///
    /// Returns the replacement callback, or `None` once the session stopped
    /// running or has no reporter.
    pub fn timer<P: Presenter>(&mut self, tag: TimerTag, presenter: &P) -> Option<TimerRequest> {
        if !self.is_running() {
            return None;
        }
        let reporter = self.reporter.as_ref()?;

        let viewport = self.frame_loop.viewport();
        let report = reporter.on_timer(tag, self.frame_loop.frames_mut(), viewport);

        if let Some(title) = &report.title {
            presenter.set_title(title);
        }
        if let Some(fps) = report.fps {
            log::debug!("{fps} fps @ {} x {}", viewport.width, viewport.height);
        }
        Some(report.next)
    }

    /// Fires the pending callback in `slot` if it is due and arms its
    /// replacement, keeping at most one callback pending.
    ///
    /// Returns whether a callback ran.
    pub fn poll_timer<P: Presenter>(
        &mut self,
        slot: &mut TimerSlot,
        now: Instant,
        presenter: &P,
    ) -> bool {
        let Some(tag) = slot.take_due(now) else {
            return false;
        };
        if let Some(next) = self.timer(tag, presenter) {
            slot.arm(now, next);
        }
        true
    }

    /// Releases the app's GPU resources.
    pub fn close<G>(&mut self, gl: &G) -> Result<()>
    where
        G: GlApi,
        A: App<G>,
    {
        self.app.on_close(gl)?;
        self.lifecycle.advance(Lifecycle::ResourcesDestroyed)?;
        Ok(())
    }

    pub fn terminate(&mut self) -> Result<()> {
        self.lifecycle.advance(Lifecycle::Terminated)?;
        Ok(())
    }
}
