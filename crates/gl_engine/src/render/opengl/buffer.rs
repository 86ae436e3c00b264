//! Vertex array and vertex buffer management
//!
//! Geometry is a flat `[x, y, z, x, y, z, ...]` float slice uploaded once
//! with static usage. The vertex array and its buffer are kept together so a
//! single release frees both.

use gl::types::{GLint, GLsizei, GLuint};

use super::{BufferUsage, GlApi, GraphicsError, GraphicsResult};

/// Floats per position
pub const POSITION_COMPONENTS: usize = 3;

/// Layout of one float vertex attribute in the bound array buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: GLuint,
    /// Floats per vertex (1-4)
    pub components: GLint,
    /// Map integer ranges to [0, 1] / [-1, 1]
    pub normalized: bool,
    /// Byte distance between vertices; 0 means tightly packed
    pub stride: GLsizei,
    /// Byte offset of the first element
    pub offset: usize,
}

impl VertexAttribute {
    /// Tightly packed float3 position at location 0
    pub const POSITION: Self = Self {
        location: 0,
        components: POSITION_COMPONENTS as GLint,
        normalized: false,
        stride: 0,
        offset: 0,
    };
}

/// Vertex array plus the buffer backing it
#[derive(Debug, PartialEq, Eq)]
#[must_use = "vertex array and buffer leak unless released"]
pub struct GeometryBuffer {
    vertex_array: GLuint,
    vertex_buffer: GLuint,
    vertex_count: usize,
}

impl GeometryBuffer {
    /// Upload float3 positions and describe them at attribute location 0
    pub fn upload(gl: &mut impl GlApi, positions: &[f32]) -> GraphicsResult<Self> {
        if positions.is_empty() {
            return Err(GraphicsError::InvalidGeometry("no vertices".to_string()));
        }
        if positions.len() % POSITION_COMPONENTS != 0 {
            return Err(GraphicsError::InvalidGeometry(format!(
                "{} floats is not a whole number of {POSITION_COMPONENTS}-component positions",
                positions.len()
            )));
        }

        let vertex_array = gl.gen_vertex_array();
        gl.bind_vertex_array(vertex_array);

        let vertex_buffer = gl.gen_buffer();
        gl.bind_array_buffer(vertex_buffer);
        gl.array_buffer_data(bytemuck::cast_slice(positions), BufferUsage::StaticDraw);

        let attribute = VertexAttribute::POSITION;
        gl.vertex_attrib_pointer(&attribute);
        gl.enable_vertex_attrib_array(attribute.location);

        let vertex_count = positions.len() / POSITION_COMPONENTS;
        log::debug!(
            "Uploaded {vertex_count} vertices to buffer {vertex_buffer} \
             (vertex array {vertex_array})"
        );

        Ok(Self {
            vertex_array,
            vertex_buffer,
            vertex_count,
        })
    }

    /// Bind the vertex array for drawing
    pub fn bind(&self, gl: &mut impl GlApi) {
        gl.bind_vertex_array(self.vertex_array);
    }

    /// Number of positions uploaded
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Raw vertex array name
    pub const fn vertex_array(&self) -> GLuint {
        self.vertex_array
    }

    /// Raw buffer name
    pub const fn vertex_buffer(&self) -> GLuint {
        self.vertex_buffer
    }

    /// Delete the vertex array and its buffer
    pub fn release(self, gl: &mut impl GlApi) {
        log::debug!(
            "Deleting vertex array {} and buffer {}",
            self.vertex_array,
            self.vertex_buffer
        );
        gl.delete_vertex_array(self.vertex_array);
        gl.delete_buffer(self.vertex_buffer);
    }
}
