//! Chapter 2.4: a vertex-colored triangle from one VBO and a two-stage shader.

use anyhow::Result;

use primer_engine::device::{GlInit, GlowApi};
use primer_engine::logging::{init_logging, LoggingConfig};
use primer_engine::render::Triangle;
use primer_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Chapter 2".to_string(),
        ..RuntimeConfig::default()
    };

    log::debug!("starting with {config:?}");
    Runtime::run(config, GlInit::default(), Triangle::<GlowApi>::new())
}
