#![deny(clippy::all, clippy::pedantic)]
//! awsops-doctor — verify the local environment is ready for AWS scripts.
//!
//! No flags: all five checks always run. Exits 0 when ready, 1 otherwise.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    awsops::doctor::run().await
}
