//! Shader compilation and program linking
//!
//! GLSL source is compiled per stage and linked into a single program. The
//! intermediate shader objects are detached and deleted once linking has run,
//! so a returned program never holds attached shaders.

use gl::types::GLuint;

use super::{GlApi, GraphicsError, GraphicsResult, ShaderStage};

/// Linked GLSL program
///
/// Owned handle; call [`ShaderProgram::release`] while the context is still
/// current.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a program leaks unless released"]
pub struct ShaderProgram {
    program: GLuint,
}

impl ShaderProgram {
    /// Compile both stages and link them
    ///
    /// Stops at the first failing step. The error carries the log of the
    /// object that failed: a vertex failure never compiles the fragment
    /// stage, and a link failure reports the program log.
    pub fn new(
        gl: &mut impl GlApi,
        vertex_source: &str,
        fragment_source: &str,
    ) -> GraphicsResult<Self> {
        let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_source) {
            Ok(fragment) => fragment,
            Err(e) => {
                gl.delete_shader(vertex);
                return Err(e);
            }
        };

        let program = gl.create_program();
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);

        // The linked executable does not depend on the shader objects
        for shader in [vertex, fragment] {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }

        if !gl.program_linked(program) {
            let log = gl.program_info_log(program);
            gl.delete_program(program);
            log::error!("Program link failed: {log}");
            return Err(GraphicsError::LinkFailure { log });
        }

        log::debug!("Linked shader program {program}");
        Ok(Self { program })
    }

    /// Make this the active program
    pub fn bind(&self, gl: &mut impl GlApi) {
        gl.use_program(self.program);
    }

    /// Raw GL name
    pub const fn handle(&self) -> GLuint {
        self.program
    }

    /// Delete the program
    pub fn release(self, gl: &mut impl GlApi) {
        log::debug!("Deleting shader program {}", self.program);
        gl.delete_program(self.program);
    }
}

fn compile_stage(gl: &mut impl GlApi, stage: ShaderStage, source: &str) -> GraphicsResult<GLuint> {
    let shader = gl.create_shader(stage);
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.shader_compiled(shader) {
        return Ok(shader);
    }

    let log = gl.shader_info_log(shader);
    gl.delete_shader(shader);
    log::error!("{stage} shader compilation failed: {log}");
    Err(GraphicsError::CompileFailure { stage, log })
}
