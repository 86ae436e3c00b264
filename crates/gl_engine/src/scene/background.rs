//! Clear-to-color scene

use crate::render::opengl::{ClearColor, GlApi};

use super::Scene;

/// Clears the color buffer every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundScene {
    color: ClearColor,
}

impl BackgroundScene {
    /// Opaque black background
    pub const fn new() -> Self {
        Self {
            color: ClearColor::OPAQUE_BLACK,
        }
    }

    /// Color used for every clear
    pub const fn color(&self) -> ClearColor {
        self.color
    }
}

impl Default for BackgroundScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for BackgroundScene {
    fn name(&self) -> &'static str {
        "background"
    }

    fn render<G: GlApi>(&self, gl: &mut G) {
        gl.clear_color(self.color);
        gl.clear_color_buffer();
    }

    fn release<G: GlApi>(self, _gl: &mut G) {}
}
