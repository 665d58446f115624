use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::HasWindowHandle;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::core::Presenter;

use super::{GlInit, GlowApi};

/// A window with a current OpenGL context and a double-buffered surface.
///
/// Fields drop in declaration order: the loaded functions first, the window
/// last, after the surface that refers to it.
pub struct GlWindow {
    gl: GlowApi,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindow {
    /// Creates the window, picks a framebuffer config, creates the context and
    /// makes it current on this thread.
    pub fn new(
        event_loop: &ActiveEventLoop,
        title: &str,
        size: LogicalSize<f64>,
        init: &GlInit,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(title)
            .with_inner_size(size);

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(init.depth_bits)
            .with_single_buffering(false);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, |configs| {
                // No multisampling is needed; prefer the plainest config.
                configs
                    .reduce(|best, c| if c.num_samples() < best.num_samples() { c } else { best })
                    .expect("glutin only invokes the picker with at least one config")
            })
            .map_err(|e| anyhow!("failed to create a rendering window: {e}"))?;

        let window = window.context("display builder returned no window")?;
        let inner = window.inner_size();
        anyhow::ensure!(inner.width > 0 && inner.height > 0, "window has zero size");

        let raw_handle = window
            .window_handle()
            .map_err(|e| anyhow!("failed to get window handle: {e}"))?
            .as_raw();

        let (major, minor) = init.version;
        let profile = if init.core_profile { GlProfile::Core } else { GlProfile::Compatibility };
        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(profile)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_handle));

        let gl_display = gl_config.display();

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .with_context(|| format!("failed to create an OpenGL {major}.{minor} context"))?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .map_err(|e| anyhow!("failed to describe window surface: {e}"))?;

        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create window surface")?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .context("failed to make OpenGL context current")?;

        let interval = if init.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = gl_surface.set_swap_interval(&gl_context, interval) {
            log::warn!("could not set swap interval: {e}");
        }

        let raw = unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        };
        // The context was made current above and stays current: nothing else
        // in the process creates one.
        let gl = unsafe { GlowApi::new(raw) };

        Ok(Self {
            gl,
            gl_surface,
            gl_context,
            window,
        })
    }

    pub fn gl(&self) -> &GlowApi {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn inner_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Resizes the surface; zero-sized (minimized) windows are skipped.
    pub fn resize_surface(&self, size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.gl_surface.resize(&self.gl_context, w, h);
    }
}

impl Presenter for GlWindow {
    fn swap_buffers(&self) -> Result<()> {
        self.window.pre_present_notify();
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .context("failed to swap buffers")
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}
