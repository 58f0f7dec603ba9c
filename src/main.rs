#![deny(clippy::all, clippy::pedantic)]
//! awsops — template driver for small AWS command-line scripts.

use std::process::ExitCode;

use clap::Parser;

use awsops::cli::{Cli, Console};
use awsops::logger;
use awsops::script::{NoopScript, Script, ScriptError, driver};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let console = Console::new(cli.output);
    let script = NoopScript;
    console.banner(script.name(), cli.dry_run);

    // The interrupt is caught exactly once, here: whichever phase is in
    // flight, Ctrl-C resolves the run to Cancelled.
    let outcome = tokio::select! {
        result = driver::run(&script, &cli, &console) => result,
        _ = tokio::signal::ctrl_c() => Err(ScriptError::Cancelled),
    };

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                ScriptError::Cancelled => console.notice(&err.to_string()),
                ScriptError::Unexpected(source) => {
                    tracing::error!(error = ?source, "unexpected failure");
                    console.write_error(&err);
                }
                ScriptError::Auth(_) | ScriptError::Api(_) | ScriptError::Transport(_) => {
                    tracing::error!("{err}");
                    console.write_error(&err);
                }
            }
            ExitCode::from(err.exit_code())
        }
    }
}
