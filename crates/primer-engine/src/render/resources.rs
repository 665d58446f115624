use crate::device::{GlApi, GlError};

use super::{Mesh, ShaderProgram, Vertex, FRAGMENT_SHADER_SRC, VERTEX_SHADER_SRC};

/// Everything the triangle draw needs, owned in acquisition order.
///
/// Shaders are created before geometry and released after it.
#[derive(Debug)]
pub struct GpuResources<G: GlApi> {
    shaders: ShaderProgram<G>,
    mesh: Mesh<G>,
}

impl<G: GlApi> GpuResources<G> {
    /// Builds the program from the embedded sources and uploads `vertices`.
    pub fn create(gl: &G, vertices: &[Vertex]) -> Result<Self, GlError> {
        let shaders = ShaderProgram::create(gl, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;
        let mesh = Mesh::upload(gl, vertices)?;
        Ok(Self { shaders, mesh })
    }

    pub fn draw(&self, gl: &G) {
        self.mesh.draw(gl);
    }

    pub fn destroy(self, gl: &G) -> Result<(), GlError> {
        self.mesh.destroy(gl)?;
        self.shaders.destroy(gl)
    }
}
