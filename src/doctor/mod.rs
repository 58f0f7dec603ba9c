/// Environment doctor: five probes, one report, one ready/not-ready verdict.
pub mod checks;
pub mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use aws_config::BehaviorVersion;

/// Run all five probes, print the report, and return the exit status.
///
/// The verdict is ready only when the toolchain and crate checks pass;
/// secrets-file, credential, and connectivity outcomes are advisory.
pub async fn run() -> ExitCode {
    println!();
    println!("awsops — environment verification");
    println!();

    let workspace = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut results = vec![
        checks::toolchain(),
        checks::env_file(&workspace),
        checks::required_crates(&workspace),
    ];

    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    results.push(checks::credentials(&config).await);
    results.push(checks::connectivity(&config).await);

    println!("{}", report::results_table(&results));

    let hints = report::remediation_hints(&results);
    if !hints.is_empty() {
        println!();
        for hint in hints {
            println!("{hint}");
        }
    }

    println!();
    if checks::is_ready(&results) {
        println!("✓ Environment is ready for AWS scripts.");
        ExitCode::SUCCESS
    } else {
        println!("✗ Fix the failures above before running scripts.");
        ExitCode::FAILURE
    }
}
