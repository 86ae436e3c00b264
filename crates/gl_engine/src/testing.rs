//! Test doubles for the graphics and windowing boundaries
//!
//! `RecordingGl` keeps just enough GL object state to answer the status
//! queries the demos make, and logs every mutating call in order.

use std::cell::Cell;
use std::collections::HashMap;

use gl::types::GLuint;

use crate::render::opengl::{BufferUsage, ClearColor, GlApi, ShaderStage, Topology, VertexAttribute};
use crate::render::window::FrameSurface;

/// One mutating GL call, in the order it was issued
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage, GLuint),
    ShaderSource(GLuint),
    CompileShader(GLuint),
    DeleteShader(GLuint),
    CreateProgram(GLuint),
    AttachShader(GLuint, GLuint),
    DetachShader(GLuint, GLuint),
    LinkProgram(GLuint),
    UseProgram(GLuint),
    DeleteProgram(GLuint),
    GenVertexArray(GLuint),
    BindVertexArray(GLuint),
    DeleteVertexArray(GLuint),
    GenBuffer(GLuint),
    BindArrayBuffer(GLuint),
    ArrayBufferData { len: usize, usage: BufferUsage },
    DeleteBuffer(GLuint),
    VertexAttribPointer(VertexAttribute),
    EnableVertexAttribArray(GLuint),
    ClearColor(ClearColor),
    ClearColorBuffer,
    DrawArrays { topology: Topology, first: i32, count: i32 },
}

#[derive(Debug)]
struct MockShader {
    stage: ShaderStage,
    compiled: bool,
    deleted: bool,
}

#[derive(Debug, Default)]
struct MockProgram {
    attached: Vec<GLuint>,
    linked: bool,
    deleted: bool,
}

/// Attribute state captured per vertex array
#[derive(Debug, Default)]
pub struct MockVertexArray {
    pub attributes: Vec<VertexAttribute>,
    pub enabled: Vec<GLuint>,
    pub array_buffer: GLuint,
    deleted: bool,
}

pub struct RecordingGl {
    version: Option<String>,
    version_queries: Cell<usize>,
    compile_failure: Option<(ShaderStage, String)>,
    link_failure: Option<String>,
    next_name: GLuint,
    shaders: HashMap<GLuint, MockShader>,
    programs: HashMap<GLuint, MockProgram>,
    vertex_arrays: HashMap<GLuint, MockVertexArray>,
    buffers: HashMap<GLuint, Option<Vec<u8>>>,
    bound_vertex_array: GLuint,
    bound_array_buffer: GLuint,
    calls: Vec<GlCall>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self {
            version: Some("4.1 RecordingGl".to_string()),
            version_queries: Cell::new(0),
            compile_failure: None,
            link_failure: None,
            next_name: 1,
            shaders: HashMap::new(),
            programs: HashMap::new(),
            vertex_arrays: HashMap::new(),
            buffers: HashMap::new(),
            bound_vertex_array: 0,
            bound_array_buffer: 0,
            calls: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn without_version(mut self) -> Self {
        self.version = None;
        self
    }

    /// Make compilation of `stage` fail with `log`
    pub fn failing_compile(mut self, stage: ShaderStage, log: &str) -> Self {
        self.compile_failure = Some((stage, log.to_string()));
        self
    }

    /// Make every link fail with `log`
    pub fn failing_link(mut self, log: &str) -> Self {
        self.link_failure = Some(log.to_string());
        self
    }

    /// Number of `GL_VERSION` queries so far
    pub fn version_queries(&self) -> usize {
        self.version_queries.get()
    }

    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    pub fn draw_calls(&self) -> Vec<(Topology, i32, i32)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                GlCall::DrawArrays { topology, first, count } => Some((topology, first, count)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_colors(&self) -> Vec<ClearColor> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                GlCall::ClearColor(color) => Some(color),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    /// Stages that reached `glCompileShader`, in order
    pub fn compiled_stages(&self) -> Vec<ShaderStage> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                GlCall::CompileShader(shader) => Some(self.shaders[shader].stage),
                _ => None,
            })
            .collect()
    }

    pub fn live_shaders(&self) -> usize {
        self.shaders.values().filter(|s| !s.deleted).count()
    }

    pub fn live_programs(&self) -> usize {
        self.programs.values().filter(|p| !p.deleted).count()
    }

    pub fn live_vertex_arrays(&self) -> usize {
        self.vertex_arrays.values().filter(|v| !v.deleted).count()
    }

    pub fn live_buffers(&self) -> usize {
        self.buffers.len()
    }

    pub fn vertex_array(&self, vertex_array: GLuint) -> Option<&MockVertexArray> {
        self.vertex_arrays.get(&vertex_array)
    }

    pub fn buffer_contents(&self, buffer: GLuint) -> Option<&[u8]> {
        self.buffers.get(&buffer).and_then(|data| data.as_deref())
    }

    fn allocate_name(&mut self) -> GLuint {
        let name = self.next_name;
        self.next_name += 1;
        name
    }
}

impl GlApi for RecordingGl {
    fn version_string(&self) -> Option<String> {
        self.version_queries.set(self.version_queries.get() + 1);
        self.version.clone()
    }

    fn create_shader(&mut self, stage: ShaderStage) -> GLuint {
        let shader = self.allocate_name();
        self.shaders.insert(
            shader,
            MockShader {
                stage,
                compiled: false,
                deleted: false,
            },
        );
        self.calls.push(GlCall::CreateShader(stage, shader));
        shader
    }

    fn shader_source(&mut self, shader: GLuint, _source: &str) {
        self.calls.push(GlCall::ShaderSource(shader));
    }

    fn compile_shader(&mut self, shader: GLuint) {
        let fails = self.compile_failure.as_ref().map(|(stage, _)| *stage);
        if let Some(state) = self.shaders.get_mut(&shader) {
            state.compiled = fails != Some(state.stage);
        }
        self.calls.push(GlCall::CompileShader(shader));
    }

    fn shader_compiled(&self, shader: GLuint) -> bool {
        self.shaders.get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: GLuint) -> String {
        match (&self.compile_failure, self.shaders.get(&shader)) {
            (Some((stage, log)), Some(state)) if *stage == state.stage => log.clone(),
            _ => String::new(),
        }
    }

    fn delete_shader(&mut self, shader: GLuint) {
        if let Some(state) = self.shaders.get_mut(&shader) {
            state.deleted = true;
        }
        self.calls.push(GlCall::DeleteShader(shader));
    }

    fn create_program(&mut self) -> GLuint {
        let program = self.allocate_name();
        self.programs.insert(program, MockProgram::default());
        self.calls.push(GlCall::CreateProgram(program));
        program
    }

    fn attach_shader(&mut self, program: GLuint, shader: GLuint) {
        if let Some(state) = self.programs.get_mut(&program) {
            state.attached.push(shader);
        }
        self.calls.push(GlCall::AttachShader(program, shader));
    }

    fn detach_shader(&mut self, program: GLuint, shader: GLuint) {
        if let Some(state) = self.programs.get_mut(&program) {
            state.attached.retain(|attached| *attached != shader);
        }
        self.calls.push(GlCall::DetachShader(program, shader));
    }

    fn link_program(&mut self, program: GLuint) {
        let linked = self.link_failure.is_none();
        if let Some(state) = self.programs.get_mut(&program) {
            state.linked = linked;
        }
        self.calls.push(GlCall::LinkProgram(program));
    }

    fn program_linked(&self, program: GLuint) -> bool {
        self.programs.get(&program).is_some_and(|p| p.linked)
    }

    fn attached_shader_count(&self, program: GLuint) -> usize {
        self.programs.get(&program).map_or(0, |p| p.attached.len())
    }

    fn program_info_log(&self, _program: GLuint) -> String {
        self.link_failure.clone().unwrap_or_default()
    }

    fn use_program(&mut self, program: GLuint) {
        self.calls.push(GlCall::UseProgram(program));
    }

    fn delete_program(&mut self, program: GLuint) {
        if let Some(state) = self.programs.get_mut(&program) {
            state.deleted = true;
        }
        self.calls.push(GlCall::DeleteProgram(program));
    }

    fn gen_vertex_array(&mut self) -> GLuint {
        let vertex_array = self.allocate_name();
        self.vertex_arrays.insert(vertex_array, MockVertexArray::default());
        self.calls.push(GlCall::GenVertexArray(vertex_array));
        vertex_array
    }

    fn bind_vertex_array(&mut self, vertex_array: GLuint) {
        self.bound_vertex_array = vertex_array;
        self.calls.push(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&mut self, vertex_array: GLuint) {
        if let Some(state) = self.vertex_arrays.get_mut(&vertex_array) {
            state.deleted = true;
        }
        if self.bound_vertex_array == vertex_array {
            self.bound_vertex_array = 0;
        }
        self.calls.push(GlCall::DeleteVertexArray(vertex_array));
    }

    fn gen_buffer(&mut self) -> GLuint {
        let buffer = self.allocate_name();
        self.buffers.insert(buffer, None);
        self.calls.push(GlCall::GenBuffer(buffer));
        buffer
    }

    fn bind_array_buffer(&mut self, buffer: GLuint) {
        self.bound_array_buffer = buffer;
        self.calls.push(GlCall::BindArrayBuffer(buffer));
    }

    fn array_buffer_data(&mut self, bytes: &[u8], usage: BufferUsage) {
        if let Some(data) = self.buffers.get_mut(&self.bound_array_buffer) {
            *data = Some(bytes.to_vec());
        }
        self.calls.push(GlCall::ArrayBufferData {
            len: bytes.len(),
            usage,
        });
    }

    fn delete_buffer(&mut self, buffer: GLuint) {
        self.buffers.remove(&buffer);
        if self.bound_array_buffer == buffer {
            self.bound_array_buffer = 0;
        }
        self.calls.push(GlCall::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer(&mut self, attribute: &VertexAttribute) {
        let array_buffer = self.bound_array_buffer;
        if let Some(state) = self.vertex_arrays.get_mut(&self.bound_vertex_array) {
            state.attributes.retain(|a| a.location != attribute.location);
            state.attributes.push(attribute.clone());
            state.array_buffer = array_buffer;
        }
        self.calls.push(GlCall::VertexAttribPointer(attribute.clone()));
    }

    fn enable_vertex_attrib_array(&mut self, location: GLuint) {
        if let Some(state) = self.vertex_arrays.get_mut(&self.bound_vertex_array) {
            if !state.enabled.contains(&location) {
                state.enabled.push(location);
            }
        }
        self.calls.push(GlCall::EnableVertexAttribArray(location));
    }

    fn clear_color(&mut self, color: ClearColor) {
        self.calls.push(GlCall::ClearColor(color));
    }

    fn clear_color_buffer(&mut self) {
        self.calls.push(GlCall::ClearColorBuffer);
    }

    fn draw_arrays(&mut self, topology: Topology, first: i32, count: i32) {
        self.calls.push(GlCall::DrawArrays {
            topology,
            first,
            count,
        });
    }
}

/// Window stand-in whose close flag is raised by the event pump
///
/// With `close_after_frames(k)` the flag is set during the k-th
/// `poll_events`, the way an OS close request arrives.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    close_after: Option<u64>,
    close_requested: bool,
    pub swaps: u64,
    pub polls: u64,
}

impl ScriptedSurface {
    pub fn close_after_frames(frames: u64) -> Self {
        Self {
            close_after: Some(frames),
            close_requested: frames == 0,
            ..Self::default()
        }
    }
}

impl FrameSurface for ScriptedSurface {
    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn poll_events(&mut self) {
        self.polls += 1;
        if self.close_after == Some(self.polls) {
            self.close_requested = true;
        }
    }
}
