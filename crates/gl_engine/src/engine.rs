//! Demo orchestration
//!
//! Sequences window creation, GL loading, scene setup, the frame loop and
//! teardown. Everything returns structured errors; terminating the process is
//! left to the binaries.

use thiserror::Error;

use crate::core::config::{ConfigError, DemoConfig};
use crate::render::{
    report_version, FrameLoop, FrameSurface, GlApi, GlfwWindow, GraphicsError, GraphicsResult,
    NativeGl, WindowError,
};
use crate::scene::Scene;

/// Top-level error
#[derive(Error, Debug)]
pub enum EngineError {
    /// Windowing library or window creation failure
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Loader, shader, link or geometry failure
    #[error(transparent)]
    Graphics(#[from] GraphicsError),

    /// Configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Window plus the GL function table loaded for its context
///
/// Created once per process. Dropping it destroys the window and terminates
/// GLFW, so scene resources must be released first.
pub struct GraphicsSession {
    window: GlfwWindow,
    gl: NativeGl,
}

impl GraphicsSession {
    /// Create the window and load OpenGL for its context
    pub fn open(config: &DemoConfig) -> Result<Self, EngineError> {
        log::info!("Opening graphics session...");

        let mut window = GlfwWindow::new(config)?;
        let gl = NativeGl::load(&mut window)?;

        Ok(Self { window, gl })
    }

    /// Report the driver version, then build `scene`, loop until closed and
    /// release the scene
    pub fn run<R: Scene>(
        &mut self,
        build: impl FnOnce(&mut NativeGl) -> GraphicsResult<R>,
    ) -> Result<u64, EngineError> {
        run_demo_with(&mut self.window, &mut self.gl, build)
    }
}

/// Scene lifecycle against any surface and GL implementation
///
/// Resource setup, frame loop, teardown. Returns the number of frames drawn.
pub fn run_scene<S, G, R>(
    surface: &mut S,
    gl: &mut G,
    build: impl FnOnce(&mut G) -> GraphicsResult<R>,
) -> Result<u64, EngineError>
where
    S: FrameSurface,
    G: GlApi,
    R: Scene,
{
    let scene = build(gl)?;
    log::info!("Scene '{}' ready", scene.name());

    let frames = FrameLoop::new().run(surface, gl, &scene);

    log::info!("Releasing scene '{}' after {frames} frames", scene.name());
    scene.release(gl);
    Ok(frames)
}

/// Everything after the GL table is loaded: version report, then the scene
/// lifecycle
///
/// A missing version string stops the demo before any scene resource exists.
pub fn run_demo_with<S, G, R>(
    surface: &mut S,
    gl: &mut G,
    build: impl FnOnce(&mut G) -> GraphicsResult<R>,
) -> Result<u64, EngineError>
where
    S: FrameSurface,
    G: GlApi,
    R: Scene,
{
    let driver_version = report_version(&*gl)?;
    log::debug!("Running on OpenGL {driver_version}");
    run_scene(surface, gl, build)
}

/// Run a complete demo: open the session and run the scene
///
/// The session is dropped on return, which destroys the window and
/// terminates GLFW.
pub fn run_demo<R: Scene>(
    config: &DemoConfig,
    build: impl FnOnce(&mut NativeGl) -> GraphicsResult<R>,
) -> Result<u64, EngineError> {
    let mut session = GraphicsSession::open(config)?;
    session.run(build)
}
