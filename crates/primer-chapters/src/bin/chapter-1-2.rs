//! Chapter 1.2: an OpenGL 4.0 core window cleared to black.
//!
//! There is no idle handler and no FPS title; each presented frame requests
//! the next one.

use anyhow::Result;

use primer_engine::core::{Blank, RedrawMode};
use primer_engine::device::GlInit;
use primer_engine::logging::{init_logging, LoggingConfig};
use primer_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Chapter 1".to_string(),
        redraw: RedrawMode::DisplayOnly,
        fps_title: false,
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GlInit::default(), Blank)
}
