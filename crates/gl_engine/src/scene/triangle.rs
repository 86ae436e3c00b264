//! Static red triangle in clip space

use crate::render::opengl::{GeometryBuffer, GlApi, GraphicsResult, ShaderProgram, Topology};

use super::Scene;

/// Passes clip-space positions straight through
pub const VERTEX_SHADER_SOURCE: &str = r"#version 410
layout(location = 0) in vec3 position;
void main() {
    gl_Position = vec4(position, 1.0);
}
";

/// Solid dark red
pub const FRAGMENT_SHADER_SOURCE: &str = r"#version 410
out vec4 fragColor;
void main() {
    fragColor = vec4(0.5, 0.0, 0.0, 1.0);
}
";

/// Bottom-left, bottom-right, top
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

/// Shader program plus the triangle's vertex array
#[derive(Debug)]
pub struct TriangleScene {
    program: ShaderProgram,
    geometry: GeometryBuffer,
}

impl TriangleScene {
    /// Compile the shaders and upload the vertices
    pub fn new(gl: &mut impl GlApi) -> GraphicsResult<Self> {
        let program = ShaderProgram::new(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)?;
        let geometry = match GeometryBuffer::upload(gl, &TRIANGLE_VERTICES) {
            Ok(geometry) => geometry,
            Err(e) => {
                program.release(gl);
                return Err(e);
            }
        };

        Ok(Self { program, geometry })
    }

    /// The linked program
    pub const fn program(&self) -> &ShaderProgram {
        &self.program
    }

    /// The uploaded geometry
    pub const fn geometry(&self) -> &GeometryBuffer {
        &self.geometry
    }
}

impl Scene for TriangleScene {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn render<G: GlApi>(&self, gl: &mut G) {
        self.program.bind(gl);
        self.geometry.bind(gl);
        gl.draw_arrays(Topology::Triangles, 0, self.geometry.vertex_count() as i32);
    }

    fn release<G: GlApi>(self, gl: &mut G) {
        self.geometry.release(gl);
        self.program.release(gl);
    }
}
