//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use complexity_cli::completion::generate_completion;
use complexity_cli::{run_demo, DemoOptions, JsonPresenter, ResultPresenter, TextPresenter};
use complexity_core::{exit_codes, CancellationToken};

use crate::config::AppConfig;
use crate::errors::exit_code;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    run_demo_mode(config)
}

fn run_demo_mode(config: &AppConfig) -> Result<i32> {
    let opts = DemoOptions {
        delay: config.delay,
        fib_count: config.fib_count,
        factorial_n: config.factorial_n,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let report = runtime.block_on(async {
        let cancel = CancellationToken::new();
        ctrlc_handler(cancel.clone());
        run_demo(&opts, &cancel).await
    });
    debug!(steps = report.steps.len(), "demo finished");

    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(JsonPresenter::new())
    } else {
        Box::new(TextPresenter::new(config.verbose, config.quiet))
    };
    presenter.present_report(&report);

    Ok(exit_code(&report))
}

fn ctrlc_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling");
            cancel.cancel();
        }
    });
}
