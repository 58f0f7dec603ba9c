#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! awsops — skeleton for small AWS command-line scripts.
//!
//! The `awsops` binary is a template driver: it parses the standard flag set,
//! validates AWS credentials, runs a pluggable [`Script`], and renders the
//! resulting records as a table, JSON, or CSV. The `awsops-doctor` binary
//! verifies a local development environment and prints a pass/warn/fail
//! report.

pub mod aws;
pub mod cli;
pub mod doctor;
pub mod logger;
pub mod script;
pub mod types;

pub use aws::{AwsError, SessionContext};
pub use cli::{Cli, Console, OutputFormat};
pub use script::{NoopScript, RunContext, Script, ScriptError};
pub use types::{CallerIdentity, Record, RunSummary};
