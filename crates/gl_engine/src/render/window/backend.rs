//! Window backend contract

/// A presentable surface driven once per frame
///
/// Window operations must happen on the thread that created the window, so
/// implementors are not required to be `Send`.
pub trait FrameSurface {
    /// Whether the windowing system has requested closure
    ///
    /// Set externally (close button, OS request); nothing in the demos sets it.
    fn should_close(&self) -> bool;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Drain pending window system events
    fn poll_events(&mut self);
}
