use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{App, Presenter, RedrawMode, Session};
use crate::device::{GlInit, GlWindow, GlowApi};
use crate::time::{FpsReporter, TimerSlot};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Initial window title and prefix of the FPS title.
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub redraw: RedrawMode,
    /// Write `"<title>: <fps> FPS @ <w> x <h>"` into the title every period.
    pub fps_title: bool,
    pub report_period: Duration,
    pub clear_color: [f32; 4],
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "primer".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            redraw: RedrawMode::Continuous,
            fps_title: true,
            report_period: FpsReporter::DEFAULT_PERIOD,
            clear_color: [0.0, 0.0, 0.0, 0.0],
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and runs `app` in it until the window closes.
    ///
    /// Returns the first fatal error: window or context creation, any GPU
    /// resource step, or a failed swap. The loop stops as soon as one occurs.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: App<GlowApi> + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => {
                log::info!("window closed, exiting");
                Ok(())
            }
        }
    }
}

struct AppState<A> {
    config: RuntimeConfig,
    gl_init: GlInit,
    session: Session<A>,

    window: Option<GlWindow>,
    timer: TimerSlot,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App<GlowApi> + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        let session = Session::new(&config, app);
        Self {
            config,
            gl_init,
            session,
            window: None,
            timer: TimerSlot::new(),
            fatal: None,
        }
    }

    /// Reports `err` and stops the loop; nothing else is rendered.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.timer.cancel();
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        event_loop.exit();
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let win = GlWindow::new(
            event_loop,
            &self.config.title,
            self.config.initial_size,
            &self.gl_init,
        )?;
        self.session.window_created()?;
        log::info!("created window {:?}", win.window().id());

        self.session.context_ready(win.gl())?;

        let size = win.inner_size();
        self.session.resize(win.gl(), size.width, size.height);

        let first_timer = self.session.start(win.gl())?;
        if let Some(request) = first_timer {
            self.timer.arm(Instant::now(), request);
        }

        win.request_redraw();
        self.window = Some(win);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.timer.cancel();
        if let Some(win) = self.window.as_ref() {
            self.session.close(win.gl())?;
        }
        // Dropping the window releases the surface and context.
        self.window = None;
        self.session.terminate()
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App<GlowApi> + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.fatal.is_some() {
            return;
        }

        if let Err(e) = self.open(event_loop) {
            self.fail(event_loop, e.context("failed to initialize window"));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.fatal.is_some() {
            return;
        }
        let Some(win) = self.window.as_ref() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                let result = self.close();
                match result {
                    Ok(()) => event_loop.exit(),
                    Err(e) => self.fail(event_loop, e),
                }
            }

            WindowEvent::Resized(new_size) => {
                win.resize_surface(new_size);
                self.session.resize(win.gl(), new_size.width, new_size.height);
                win.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let result = self.session.display(win.gl(), win);
                if let Err(e) = result {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.fatal.is_some() {
            event_loop.exit();
            return;
        }
        let Some(win) = self.window.as_ref() else {
            return;
        };

        self.session.poll_timer(&mut self.timer, Instant::now(), win);

        self.session.idle(win);

        let flow = match self.timer.deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(flow);
    }
}
