//! Frame loop
//!
//! Two states, `Running` and `Closing`. The only transition is taken when the
//! window's close flag is observed at the top of an iteration; nothing in the
//! program raises that flag itself. There is no frame pacing or delta time.

use crate::render::opengl::GlApi;
use crate::render::window::FrameSurface;
use crate::scene::Scene;

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// Drawing frames
    Running,
    /// Close flag observed; no further frames
    Closing,
}

/// Draw/swap/poll driver
#[derive(Debug)]
pub struct FrameLoop {
    state: FrameState,
    frames: u64,
}

impl FrameLoop {
    /// New loop in the `Running` state
    pub const fn new() -> Self {
        Self {
            state: FrameState::Running,
            frames: 0,
        }
    }

    /// Current state
    pub const fn state(&self) -> FrameState {
        self.state
    }

    /// Frames completed so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one iteration
    ///
    /// Checks the close flag, then renders, swaps and polls. Once `Closing`
    /// this is a no-op.
    pub fn step<S, G, R>(&mut self, surface: &mut S, gl: &mut G, scene: &R) -> FrameState
    where
        S: FrameSurface,
        G: GlApi,
        R: Scene,
    {
        if self.state == FrameState::Closing {
            return self.state;
        }

        if surface.should_close() {
            log::info!("Close requested after {} frames", self.frames);
            self.state = FrameState::Closing;
            return self.state;
        }

        scene.render(gl);
        surface.swap_buffers();
        surface.poll_events();
        self.frames += 1;

        if self.frames == 1 {
            log::debug!("First {} frame presented", scene.name());
        }

        self.state
    }

    /// Iterate until the close flag is set; returns the frame count
    pub fn run<S, G, R>(&mut self, surface: &mut S, gl: &mut G, scene: &R) -> u64
    where
        S: FrameSurface,
        G: GlApi,
        R: Scene,
    {
        log::info!("Entering {} frame loop", scene.name());
        while self.step(surface, gl, scene) == FrameState::Running {}
        self.frames
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
