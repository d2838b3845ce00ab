//! Complexity demo: runs each reference operation with sample inputs.

use anyhow::Result;
use complexity_core::exit_codes;
use complexity_lib::{app, config, logging};

fn main() -> Result<()> {
    logging::init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    let code = app::run(&config)?;
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
