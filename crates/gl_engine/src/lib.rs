//! # GL Engine
//!
//! Window, context and OpenGL plumbing for two fixed demos: a static
//! triangle and a clear-to-black background.
//!
//! ## Features
//!
//! - **GLFW Windowing**: fixed-size window with an OpenGL 4.1 core,
//!   forward-compatible context
//! - **Testable GL Boundary**: every GL call goes through [`GlApi`]
//! - **Owned Resources**: shader programs and vertex array/buffer pairs with
//!   explicit, symmetric release
//! - **Structured Errors**: init, compile, link and window failures are values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     gl_engine::foundation::logging::init();
//!     let frames = run_demo(&DemoConfig::triangle(), |gl| TriangleScene::new(gl))?;
//!     log::info!("drew {frames} frames");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod render;
pub mod scene;

mod engine;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{run_demo, run_demo_with, run_scene, EngineError, GraphicsSession};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, ContextConfig, DemoConfig, WindowProperties},
        render::{
            ClearColor, FrameLoop, FrameState, FrameSurface, GeometryBuffer, GlApi, GraphicsError,
            NativeGl, ShaderProgram, ShaderStage, WindowError,
        },
        run_demo, run_demo_with, run_scene,
        scene::{BackgroundScene, Scene, TriangleScene},
        EngineError, GraphicsSession,
    };
}
