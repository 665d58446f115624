use crate::device::{check_error, GlApi, GlError};

use super::Vertex;

/// Static vertex data in a VBO, described by a VAO.
///
/// The data is uploaded once in [`upload`](Self::upload) and never rewritten.
/// The VAO stays bound after upload so a single draw call needs no extra state.
#[derive(Debug)]
pub struct Mesh<G: GlApi> {
    vao: G::VertexArray,
    vbo: G::Buffer,
    vertex_count: i32,
}

impl<G: GlApi> Mesh<G> {
    pub fn upload(gl: &G, vertices: &[Vertex]) -> Result<Self, GlError> {
        let stride = Vertex::STRIDE as i32;
        let color_offset = Vertex::COLOR_OFFSET as i32;
        let vertex_count = i32::try_from(vertices.len()).map_err(|_| GlError::Allocation {
            object: "vertex buffer",
            message: format!("{} vertices exceed the draw range", vertices.len()),
        })?;

        let vao = gl
            .create_vertex_array()
            .map_err(|message| GlError::Allocation { object: "vertex array", message })?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl
            .create_buffer()
            .map_err(|message| GlError::Allocation { object: "vertex buffer", message })?;
        gl.bind_array_buffer(Some(vbo));
        gl.array_buffer_static_data(bytemuck::cast_slice(vertices));

        gl.vertex_attrib_pointer_f32(Vertex::POSITION_LOCATION, 4, stride, 0);
        gl.vertex_attrib_pointer_f32(Vertex::COLOR_LOCATION, 4, stride, color_offset);

        gl.enable_vertex_attrib_array(Vertex::POSITION_LOCATION);
        gl.enable_vertex_attrib_array(Vertex::COLOR_LOCATION);

        check_error(gl, "create a VBO")?;
        log::debug!("uploaded {vertex_count} vertices to {vbo:?} via {vao:?}");

        Ok(Self {
            vao,
            vbo,
            vertex_count,
        })
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Issues one triangle-list draw over the whole buffer.
    pub fn draw(&self, gl: &G) {
        gl.draw_triangles(0, self.vertex_count);
    }

    /// Disables the attributes, then unbinds and deletes the buffer and array.
    pub fn destroy(self, gl: &G) -> Result<(), GlError> {
        gl.disable_vertex_attrib_array(Vertex::COLOR_LOCATION);
        gl.disable_vertex_attrib_array(Vertex::POSITION_LOCATION);

        gl.bind_array_buffer(None);
        gl.delete_buffer(self.vbo);

        gl.bind_vertex_array(None);
        gl.delete_vertex_array(self.vao);

        check_error(gl, "destroy the VBO")?;
        log::debug!("released {:?} and {:?}", self.vbo, self.vao);
        Ok(())
    }
}
