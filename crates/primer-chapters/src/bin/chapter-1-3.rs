//! Chapter 1.3: continuous redraw with the frame rate in the window title.

use anyhow::Result;

use primer_engine::core::Blank;
use primer_engine::device::GlInit;
use primer_engine::logging::{init_logging, LoggingConfig};
use primer_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Chapter 1".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GlInit::default(), Blank)
}
