//! Window abstraction used by the frame loop
//!
//! The frame loop only needs three things from a window: the close flag,
//! a buffer swap and an event pump. [`FrameSurface`] is that contract;
//! [`GlfwWindow`](crate::render::opengl::GlfwWindow) implements it for real
//! windows and tests script it.

pub mod backend;

pub use backend::FrameSurface;
