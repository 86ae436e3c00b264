//! Triangle Demo
//!
//! Opens an 800x600 OpenGL 4.1 core window and draws a static red triangle
//! until the window is closed.

use std::process::ExitCode;

use gl_engine::foundation::logging;
use gl_engine::prelude::*;

fn main() -> ExitCode {
    logging::init();
    log::info!("Starting triangle demo");

    match run_demo(&DemoConfig::triangle(), |gl| TriangleScene::new(gl)) {
        Ok(frames) => {
            log::info!("Triangle demo finished after {frames} frames");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Triangle demo failed: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
