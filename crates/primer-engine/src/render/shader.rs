use crate::device::{check_error, GlApi, GlError, ShaderStage};

/// Passes position and color through to the rasterizer.
pub const VERTEX_SHADER_SRC: &str = "\
#version 400

layout(location=0) in vec4 in_Position;
layout(location=1) in vec4 in_Color;
out vec4 ex_Color;

void main(void) {
  gl_Position = in_Position;
  ex_Color = in_Color;
}
";

/// Writes the interpolated vertex color.
pub const FRAGMENT_SHADER_SRC: &str = "\
#version 400

in vec4 ex_Color;
out vec4 out_Color;

void main() {
  out_Color = ex_Color;
}
";

/// A linked, active program with both of its stages still attached.
///
/// Acquisition order: program, vertex stage, fragment stage, attach vertex,
/// attach fragment, link, use. [`destroy`](Self::destroy) walks it backwards,
/// so the program is created first rather than after the stages compile, and
/// the fragment stage is detached before the vertex stage.
#[derive(Debug)]
pub struct ShaderProgram<G: GlApi> {
    program: G::Program,
    vertex: G::Shader,
    fragment: G::Shader,
}

impl<G: GlApi> ShaderProgram<G> {
    /// Compiles both stages, links them and makes the program current.
    pub fn create(gl: &G, vertex_src: &str, fragment_src: &str) -> Result<Self, GlError> {
        let program = gl
            .create_program()
            .map_err(|message| GlError::Allocation { object: "shader program", message })?;

        let vertex = compile(gl, ShaderStage::Vertex, vertex_src)?;
        let fragment = compile(gl, ShaderStage::Fragment, fragment_src)?;

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        if !gl.program_link_status(program) {
            return Err(GlError::Link { log: gl.program_info_log(program) });
        }
        gl.use_program(Some(program));

        check_error(gl, "create the shaders")?;
        log::debug!("shader program {program:?} linked and active");

        Ok(Self {
            program,
            vertex,
            fragment,
        })
    }

    pub fn program(&self) -> G::Program {
        self.program
    }

    /// Deactivates, detaches and deletes everything `create` acquired.
    pub fn destroy(self, gl: &G) -> Result<(), GlError> {
        gl.use_program(None);

        gl.detach_shader(self.program, self.fragment);
        gl.detach_shader(self.program, self.vertex);

        gl.delete_shader(self.fragment);
        gl.delete_shader(self.vertex);

        gl.delete_program(self.program);

        check_error(gl, "destroy the shaders")?;
        log::debug!("shader program {:?} released", self.program);
        Ok(())
    }
}

fn compile<G: GlApi>(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader, GlError> {
    let shader = gl.create_shader(stage).map_err(|message| GlError::Allocation {
        object: match stage {
            ShaderStage::Vertex => "vertex shader",
            ShaderStage::Fragment => "fragment shader",
        },
        message,
    })?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.shader_compile_status(shader) {
        return Err(GlError::Compile { stage, log: gl.shader_info_log(shader) });
    }
    Ok(shader)
}
