//! # Core Module
//!
//! Shared configuration types used by the window, the renderer and the
//! binaries.

pub mod config;

pub use config::{Config, ConfigError, ConfigFormat, ContextConfig, DemoConfig, WindowProperties};
