//! OpenGL backend
//!
//! Everything the demos ask of the graphics library goes through [`GlApi`].
//! [`NativeGl`] forwards to the loaded `gl` function table; tests drive the
//! same code through a recording implementation.

pub mod buffer;
pub mod native;
pub mod shader;
pub mod window;

pub use buffer::{GeometryBuffer, VertexAttribute};
pub use native::NativeGl;
pub use shader::ShaderProgram;
pub use window::{GlfwWindow, WindowError, WindowResult};

use gl::types::{GLenum, GLuint};
use thiserror::Error;

/// Graphics library errors
#[derive(Error, Debug)]
pub enum GraphicsError {
    /// The function table could not be loaded from the current context
    #[error("Failed to initialize OpenGL: {0}")]
    LoaderFailed(String),

    /// `glGetString(GL_VERSION)` returned nothing
    #[error("Failed to initialize OpenGL: driver reported no version string")]
    VersionUnavailable,

    /// A shader stage failed to compile; `log` is the compiler output
    #[error("Failed to compile {stage} shader: {log}")]
    CompileFailure {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler info log
        log: String,
    },

    /// The program failed to link; `log` is the linker output
    #[error("Failed to link program: {log}")]
    LinkFailure {
        /// Program info log
        log: String,
    },

    /// Vertex data that cannot be described as float3 positions
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type for graphics operations
pub type GraphicsResult<T> = Result<T, GraphicsError>;

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    /// Matching `glCreateShader` enum
    pub const fn gl_enum(self) -> GLenum {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Primitive assembly mode for `glDrawArrays`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Independent triangles
    Triangles,
}

impl Topology {
    /// Matching GL enum
    pub const fn gl_enum(self) -> GLenum {
        match self {
            Self::Triangles => gl::TRIANGLES,
        }
    }
}

/// Buffer usage hint for `glBufferData`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times
    StaticDraw,
}

impl BufferUsage {
    /// Matching GL enum
    pub const fn gl_enum(self) -> GLenum {
        match self {
            Self::StaticDraw => gl::STATIC_DRAW,
        }
    }
}

/// Normalized RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl ClearColor {
    /// `{0, 0, 0, 1}`
    pub const OPAQUE_BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from its components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// The OpenGL operations the demos consume
///
/// Handles are raw GL names. Methods mirror the GL entry point they wrap;
/// the status queries fold `glGet*iv` into a `bool`/count.
pub trait GlApi {
    /// `glGetString(GL_VERSION)`
    fn version_string(&self) -> Option<String>;

    /// `glCreateShader`
    fn create_shader(&mut self, stage: ShaderStage) -> GLuint;
    /// `glShaderSource` with a single string
    fn shader_source(&mut self, shader: GLuint, source: &str);
    /// `glCompileShader`
    fn compile_shader(&mut self, shader: GLuint);
    /// `GL_COMPILE_STATUS`
    fn shader_compiled(&self, shader: GLuint) -> bool;
    /// `glGetShaderInfoLog`
    fn shader_info_log(&self, shader: GLuint) -> String;
    /// `glDeleteShader`
    fn delete_shader(&mut self, shader: GLuint);

    /// `glCreateProgram`
    fn create_program(&mut self) -> GLuint;
    /// `glAttachShader`
    fn attach_shader(&mut self, program: GLuint, shader: GLuint);
    /// `glDetachShader`
    fn detach_shader(&mut self, program: GLuint, shader: GLuint);
    /// `glLinkProgram`
    fn link_program(&mut self, program: GLuint);
    /// `GL_LINK_STATUS`
    fn program_linked(&self, program: GLuint) -> bool;
    /// `GL_ATTACHED_SHADERS`
    fn attached_shader_count(&self, program: GLuint) -> usize;
    /// `glGetProgramInfoLog`
    fn program_info_log(&self, program: GLuint) -> String;
    /// `glUseProgram`
    fn use_program(&mut self, program: GLuint);
    /// `glDeleteProgram`
    fn delete_program(&mut self, program: GLuint);

    /// `glGenVertexArrays` for one name
    fn gen_vertex_array(&mut self) -> GLuint;
    /// `glBindVertexArray`
    fn bind_vertex_array(&mut self, vertex_array: GLuint);
    /// `glDeleteVertexArrays` for one name
    fn delete_vertex_array(&mut self, vertex_array: GLuint);

    /// `glGenBuffers` for one name
    fn gen_buffer(&mut self) -> GLuint;
    /// `glBindBuffer(GL_ARRAY_BUFFER, ..)`
    fn bind_array_buffer(&mut self, buffer: GLuint);
    /// `glBufferData(GL_ARRAY_BUFFER, ..)` for the bound buffer
    fn array_buffer_data(&mut self, bytes: &[u8], usage: BufferUsage);
    /// `glDeleteBuffers` for one name
    fn delete_buffer(&mut self, buffer: GLuint);

    /// `glVertexAttribPointer` for a float attribute sourced from the bound buffer
    fn vertex_attrib_pointer(&mut self, attribute: &VertexAttribute);
    /// `glEnableVertexAttribArray`
    fn enable_vertex_attrib_array(&mut self, location: GLuint);

    /// `glClearColor`
    fn clear_color(&mut self, color: ClearColor);
    /// `glClear(GL_COLOR_BUFFER_BIT)`
    fn clear_color_buffer(&mut self);
    /// `glDrawArrays`
    fn draw_arrays(&mut self, topology: Topology, first: i32, count: i32);
}

/// Query the driver version and report it
///
/// Prints `OpenGL version: <version>` to stdout; this is the one line the
/// demos write there.
pub fn report_version(gl: &impl GlApi) -> GraphicsResult<String> {
    let version = gl.version_string().ok_or(GraphicsError::VersionUnavailable)?;
    println!("OpenGL version: {version}");
    log::info!("OpenGL driver version {version}");
    Ok(version)
}
