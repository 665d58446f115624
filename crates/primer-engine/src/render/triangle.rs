use crate::core::App;
use crate::device::{GlApi, GlError};

use super::{GpuResources, TRIANGLE};

/// Draws the fixed RGB triangle every frame.
pub struct Triangle<G: GlApi> {
    resources: Option<GpuResources<G>>,
}

impl<G: GlApi> Triangle<G> {
    pub fn new() -> Self {
        Self { resources: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.resources.is_some()
    }
}

impl<G: GlApi> Default for Triangle<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GlApi> App<G> for Triangle<G> {
    fn on_init(&mut self, gl: &G) -> Result<(), GlError> {
        debug_assert!(self.resources.is_none(), "triangle resources created twice");
        self.resources = Some(GpuResources::create(gl, &TRIANGLE)?);
        Ok(())
    }

    fn on_draw(&mut self, gl: &G) {
        if let Some(resources) = &self.resources {
            resources.draw(gl);
        }
    }

    fn on_close(&mut self, gl: &G) -> Result<(), GlError> {
        match self.resources.take() {
            Some(resources) => resources.destroy(gl),
            None => Ok(()),
        }
    }
}
