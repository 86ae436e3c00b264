//! Background Demo
//!
//! Opens an 800x600 OpenGL 4.1 core window and clears it to opaque black
//! every frame until the window is closed.

use std::process::ExitCode;

use gl_engine::foundation::logging;
use gl_engine::prelude::*;

fn main() -> ExitCode {
    logging::init();
    log::info!("Starting background demo");

    match run_demo(&DemoConfig::background(), |_| Ok(BackgroundScene::new())) {
        Ok(frames) => {
            log::info!("Background demo finished after {frames} frames");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Background demo failed: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
