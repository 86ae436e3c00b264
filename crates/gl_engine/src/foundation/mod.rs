//! Foundation module - utilities shared by every subsystem
//!
//! Currently only logging setup; the demos need no math, timing or
//! collection helpers.

pub mod logging;
