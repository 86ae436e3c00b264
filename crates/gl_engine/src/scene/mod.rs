//! Demo scenes
//!
//! A scene owns whatever GPU resources it needs, draws one frame on request
//! and hands its resources back on release.

pub mod background;
pub mod triangle;

pub use background::BackgroundScene;
pub use triangle::TriangleScene;

use crate::render::opengl::GlApi;

/// Fixed content drawn every frame
pub trait Scene {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Issue the GL calls for one frame
    fn render<G: GlApi>(&self, gl: &mut G);

    /// Delete the scene's GL objects; the context must still be current
    fn release<G: GlApi>(self, gl: &mut G)
    where
        Self: Sized;
}
