use std::fmt::Debug;

/// Programmable pipeline stage of a shader object.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// The slice of the OpenGL driver this crate uses.
///
/// Implementors must have their context current on the calling thread for
/// every call. Handles are opaque and only meaningful to the implementor that
/// produced them.
///
/// `GL_ARRAY_BUFFER` is the only buffer target and `GL_FLOAT` the only
/// attribute type, so both are implied by the method names.
pub trait GlApi {
    type Shader: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type VertexArray: Copy + Debug + PartialEq;
    type Buffer: Copy + Debug + PartialEq;

    /// `GL_VERSION` string.
    fn version(&self) -> String;

    /// Pops the oldest recorded error flag (`GL_NO_ERROR` when clean).
    fn get_error(&self) -> u32;

    // ── frame state ───────────────────────────────────────────────────────

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: u32);
    fn draw_triangles(&self, first: i32, count: i32);

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // ── geometry ──────────────────────────────────────────────────────────

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vao: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` to the bound array buffer with `GL_STATIC_DRAW`.
    fn array_buffer_static_data(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Declares a non-normalized float attribute; `stride`/`offset` in bytes.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn disable_vertex_attrib_array(&self, index: u32);
}
