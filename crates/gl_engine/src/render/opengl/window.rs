//! Window management using GLFW
//!
//! Creates the window together with its OpenGL context and makes that
//! context current on the calling thread.

use std::cell::RefCell;
use std::rc::Rc;

use glfw::Context;
use thiserror::Error;

use crate::core::config::DemoConfig;
use crate::render::window::FrameSurface;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `glfwInit` failed
    #[error("Failed to initialize glfw: {0}")]
    InitializationFailed(String),

    /// Window or context settings rejected before reaching GLFW
    #[error("Invalid window properties: {0}")]
    InvalidProperties(String),

    /// `glfwCreateWindow` returned no window
    #[error("Failed to create {width}x{height} window \"{title}\": {reason}")]
    CreationFailed {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested title
        title: String,
        /// Last error GLFW reported while creating the window
        reason: String,
    },
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Last error description delivered through the GLFW error callback
///
/// GLFW reports failures out of band; the callback records them here so the
/// `Err`/`None` returned by `init`/`create_window` can carry the text.
#[derive(Clone, Default)]
struct ErrorSlot(Rc<RefCell<Option<String>>>);

impl ErrorSlot {
    fn record(&self, error: glfw::Error, description: String) {
        log::error!("GLFW error ({error:?}): {description}");
        *self.0.borrow_mut() = Some(description);
    }

    fn take_or(&self, fallback: &str) -> String {
        self.0
            .borrow_mut()
            .take()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// GLFW window owning the library handle and the window's event queue
///
/// Dropping it destroys the window and, with the last `Glfw` handle,
/// terminates the library.
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwWindow {
    /// Initialize GLFW, create the window and make its context current
    pub fn new(config: &DemoConfig) -> WindowResult<Self> {
        config
            .validate()
            .map_err(|e| WindowError::InvalidProperties(e.to_string()))?;

        let errors = ErrorSlot::default();
        let callback_slot = errors.clone();
        let mut glfw = glfw::init(move |error, description| {
            callback_slot.record(error, description);
        })
        .map_err(|e| WindowError::InitializationFailed(errors.take_or(&e.to_string())))?;

        let context = &config.context;
        glfw.window_hint(glfw::WindowHint::Resizable(context.resizable));
        glfw.window_hint(glfw::WindowHint::ContextVersion(
            context.version_major,
            context.version_minor,
        ));
        if context.core_profile {
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        }
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(context.forward_compatible));

        let properties = &config.window;
        let (mut window, events) = glfw
            .create_window(
                properties.width,
                properties.height,
                &properties.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| WindowError::CreationFailed {
                width: properties.width,
                height: properties.height,
                title: properties.title.clone(),
                reason: errors.take_or("no window returned"),
            })?;

        window.make_current();

        log::info!(
            "Created {}x{} window \"{}\" (OpenGL {}.{}{})",
            properties.width,
            properties.height,
            properties.title,
            context.version_major,
            context.version_minor,
            if context.core_profile { " core" } else { "" },
        );

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Look up a GL entry point through the current context
    pub fn get_proc_address(&mut self, symbol: &str) -> *const std::ffi::c_void {
        self.window.get_proc_address(symbol) as *const _
    }
}

impl FrameSurface for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
        // No callbacks or polling flags are registered; drain and drop
        for (_, event) in glfw::flush_messages(&self.events) {
            log::trace!("Discarding window event {event:?}");
        }
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        log::debug!("Destroying window and terminating GLFW");
    }
}
