//! # Rendering System
//!
//! OpenGL 4.1 core rendering for the demos.
//!
//! ## Architecture
//!
//! - **Window**: [`FrameSurface`] is what the frame loop needs from a window;
//!   [`GlfwWindow`] provides it with a current GL context
//! - **OpenGL Backend**: [`GlApi`] is the graphics library boundary,
//!   [`NativeGl`] the loaded implementation
//! - **Resources**: [`ShaderProgram`] and [`GeometryBuffer`], each with an
//!   explicit release
//! - **Frame Loop**: [`FrameLoop`] draws, swaps and polls until the window
//!   asks to close

pub mod frame_loop;
pub mod opengl;
pub mod window;

pub use frame_loop::{FrameLoop, FrameState};
pub use opengl::{
    report_version, BufferUsage, ClearColor, GeometryBuffer, GlApi, GlfwWindow, GraphicsError,
    GraphicsResult, NativeGl, ShaderProgram, ShaderStage, Topology, VertexAttribute, WindowError,
    WindowResult,
};
pub use window::FrameSurface;
