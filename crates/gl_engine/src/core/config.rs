//! # Demo Configuration
//!
//! Window and context settings for the two demos. Both binaries use the
//! compiled-in presets ([`DemoConfig::triangle`], [`DemoConfig::background`]);
//! the types are serializable so the same values can be stored through the
//! [`Config`] trait.

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// Window size and title
///
/// Immutable once it has been used to create a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowProperties {
    /// Client area width in screen coordinates
    pub width: u32,
    /// Client area height in screen coordinates
    pub height: u32,
    /// Title bar text
    pub title: String,
}

impl WindowProperties {
    /// Create window properties
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }

    /// Validate the properties
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        if self.title.is_empty() {
            return Err("Window title cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for WindowProperties {
    fn default() -> Self {
        Self::new(800, 600, "OpenGL Triangle")
    }
}

/// OpenGL context hints passed to GLFW before window creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Requested context major version
    pub version_major: u32,
    /// Requested context minor version
    pub version_minor: u32,
    /// Request the core profile instead of compatibility
    pub core_profile: bool,
    /// Request a forward-compatible context (required on macOS for 3.2+)
    pub forward_compatible: bool,
    /// Whether the user may resize the window
    pub resizable: bool,
}

impl ContextConfig {
    /// OpenGL 4.1 core, forward-compatible, fixed-size window
    pub const fn gl41_core() -> Self {
        Self {
            version_major: 4,
            version_minor: 1,
            core_profile: true,
            forward_compatible: true,
            resizable: false,
        }
    }

    /// Set the requested context version
    pub fn with_version(mut self, major: u32, minor: u32) -> Self {
        self.version_major = major;
        self.version_minor = minor;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.version_major == 0 {
            return Err("Context major version must be at least 1".to_string());
        }

        // Profiles only exist from 3.2 onwards
        if self.core_profile && (self.version_major, self.version_minor) < (3, 2) {
            return Err(format!(
                "Core profile requires OpenGL 3.2 or newer, got {}.{}",
                self.version_major, self.version_minor
            ));
        }

        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::gl41_core()
    }
}

/// # Complete Demo Configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Window to create
    pub window: WindowProperties,
    /// Context hints for that window
    pub context: ContextConfig,
}

impl DemoConfig {
    /// Preset for the triangle demo
    pub fn triangle() -> Self {
        Self {
            window: WindowProperties::new(800, 600, "OpenGL Triangle"),
            context: ContextConfig::gl41_core(),
        }
    }

    /// Preset for the clear-color demo
    pub fn background() -> Self {
        Self {
            window: WindowProperties::new(800, 600, "OpenGL Background"),
            context: ContextConfig::gl41_core(),
        }
    }

    /// Replace the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate().map_err(ConfigError::Invalid)?;
        self.context.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

impl Config for DemoConfig {}
