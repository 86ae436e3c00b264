//! `GlApi` backed by the loaded `gl` function table

#![allow(unsafe_code)]

use std::ffi::{c_void, CStr};
use std::marker::PhantomData;
use std::ptr;

use gl::types::{GLboolean, GLchar, GLint, GLsizeiptr, GLuint};

use super::{
    BufferUsage, ClearColor, GlApi, GlfwWindow, GraphicsError, GraphicsResult, ShaderStage,
    Topology, VertexAttribute,
};

/// Entry points whose absence means the context cannot run the demos
const REQUIRED_ENTRY_POINTS: [(&str, fn() -> bool); 8] = [
    ("glGetString", gl::GetString::is_loaded),
    ("glCreateShader", gl::CreateShader::is_loaded),
    ("glCreateProgram", gl::CreateProgram::is_loaded),
    ("glGenVertexArrays", gl::GenVertexArrays::is_loaded),
    ("glGenBuffers", gl::GenBuffers::is_loaded),
    ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glDrawArrays", gl::DrawArrays::is_loaded),
];

/// Token proving the GL function table was loaded for a current context
///
/// `gl` keeps its function pointers in process globals, so the token carries
/// no data. It is `!Send` because the context it was loaded for is bound to
/// the creating thread.
#[derive(Debug, Clone, Copy)]
pub struct NativeGl {
    _not_send: PhantomData<*const ()>,
}

impl NativeGl {
    /// Load the function table through the window's current context
    pub fn load(window: &mut GlfwWindow) -> GraphicsResult<Self> {
        gl::load_with(|symbol| window.get_proc_address(symbol));

        let missing: Vec<&str> = REQUIRED_ENTRY_POINTS
            .iter()
            .filter(|(_, is_loaded)| !is_loaded())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(GraphicsError::LoaderFailed(format!(
                "missing entry points: {}",
                missing.join(", ")
            )));
        }

        log::debug!("OpenGL function table loaded");
        Ok(Self {
            _not_send: PhantomData,
        })
    }
}

impl GlApi for NativeGl {
    fn version_string(&self) -> Option<String> {
        let version = unsafe { gl::GetString(gl::VERSION) };
        if version.is_null() {
            return None;
        }
        let version = unsafe { CStr::from_ptr(version.cast()) };
        Some(version.to_string_lossy().into_owned())
    }

    fn create_shader(&mut self, stage: ShaderStage) -> GLuint {
        unsafe { gl::CreateShader(stage.gl_enum()) }
    }

    fn shader_source(&mut self, shader: GLuint, source: &str) {
        let pointer = source.as_ptr().cast::<GLchar>();
        let length = source.len() as GLint;
        unsafe { gl::ShaderSource(shader, 1, &pointer, &length) };
    }

    fn compile_shader(&mut self, shader: GLuint) {
        unsafe { gl::CompileShader(shader) };
    }

    fn shader_compiled(&self, shader: GLuint) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn shader_info_log(&self, shader: GLuint) -> String {
        let mut length = 0;
        unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut length) };
        read_info_log(length, |capacity, written, buffer| unsafe {
            gl::GetShaderInfoLog(shader, capacity, written, buffer);
        })
    }

    fn delete_shader(&mut self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) };
    }

    fn create_program(&mut self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&mut self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) };
    }

    fn detach_shader(&mut self, program: GLuint, shader: GLuint) {
        unsafe { gl::DetachShader(program, shader) };
    }

    fn link_program(&mut self, program: GLuint) {
        unsafe { gl::LinkProgram(program) };
    }

    fn program_linked(&self, program: GLuint) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn attached_shader_count(&self, program: GLuint) -> usize {
        let mut count = 0;
        unsafe { gl::GetProgramiv(program, gl::ATTACHED_SHADERS, &mut count) };
        usize::try_from(count).unwrap_or(0)
    }

    fn program_info_log(&self, program: GLuint) -> String {
        let mut length = 0;
        unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut length) };
        read_info_log(length, |capacity, written, buffer| unsafe {
            gl::GetProgramInfoLog(program, capacity, written, buffer);
        })
    }

    fn use_program(&mut self, program: GLuint) {
        unsafe { gl::UseProgram(program) };
    }

    fn delete_program(&mut self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) };
    }

    fn gen_vertex_array(&mut self) -> GLuint {
        let mut vertex_array = 0;
        unsafe { gl::GenVertexArrays(1, &mut vertex_array) };
        vertex_array
    }

    fn bind_vertex_array(&mut self, vertex_array: GLuint) {
        unsafe { gl::BindVertexArray(vertex_array) };
    }

    fn delete_vertex_array(&mut self, vertex_array: GLuint) {
        unsafe { gl::DeleteVertexArrays(1, &vertex_array) };
    }

    fn gen_buffer(&mut self) -> GLuint {
        let mut buffer = 0;
        unsafe { gl::GenBuffers(1, &mut buffer) };
        buffer
    }

    fn bind_array_buffer(&mut self, buffer: GLuint) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, buffer) };
    }

    fn array_buffer_data(&mut self, bytes: &[u8], usage: BufferUsage) {
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast::<c_void>(),
                usage.gl_enum(),
            );
        }
    }

    fn delete_buffer(&mut self, buffer: GLuint) {
        unsafe { gl::DeleteBuffers(1, &buffer) };
    }

    fn vertex_attrib_pointer(&mut self, attribute: &VertexAttribute) {
        let normalized: GLboolean = if attribute.normalized { gl::TRUE } else { gl::FALSE };
        // Byte offset into the bound buffer, passed in pointer position
        let offset = ptr::null::<u8>().wrapping_add(attribute.offset).cast::<c_void>();
        unsafe {
            gl::VertexAttribPointer(
                attribute.location,
                attribute.components,
                gl::FLOAT,
                normalized,
                attribute.stride,
                offset,
            );
        }
    }

    fn enable_vertex_attrib_array(&mut self, location: GLuint) {
        unsafe { gl::EnableVertexAttribArray(location) };
    }

    fn clear_color(&mut self, color: ClearColor) {
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    }

    fn clear_color_buffer(&mut self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    fn draw_arrays(&mut self, topology: Topology, first: i32, count: i32) {
        unsafe { gl::DrawArrays(topology.gl_enum(), first, count) };
    }
}

/// Read a shader/program info log of `length` bytes (including the NUL)
fn read_info_log(length: GLint, read: impl FnOnce(GLint, *mut GLint, *mut GLchar)) -> String {
    if length <= 0 {
        return String::new();
    }

    let mut buffer = vec![0_u8; length as usize];
    let mut written: GLint = 0;
    read(length, &mut written as *mut GLint, buffer.as_mut_ptr().cast());
    buffer.truncate(usize::try_from(written).unwrap_or(0));

    String::from_utf8_lossy(&buffer).trim_end_matches('\0').to_string()
}
