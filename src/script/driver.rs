/// The four-phase run driver: parse happens in `main`, the rest here.
///
/// Phases are strictly sequential — bootstrap, execute, report — and any
/// failure stops the run at that phase.
use super::{RunContext, Script, ScriptError};
use crate::aws::SessionContext;
use crate::cli::{Cli, Console};
use crate::types::RunSummary;

/// Run the bootstrap, execute, and report phases for `script`.
///
/// # Errors
///
/// Returns [`ScriptError::Auth`] when credential validation fails — the
/// execute and report phases are never reached — and whatever the script's
/// execute phase propagates.
pub async fn run<S: Script>(
    script: &S,
    args: &Cli,
    console: &Console,
) -> Result<RunSummary, ScriptError> {
    console.status("Connecting to AWS...");
    let session = SessionContext::new(args.profile.clone(), args.region.clone()).await;
    let identity = session
        .validate_credentials()
        .await
        .map_err(|err| ScriptError::Auth(err.to_string()))?;
    console.success(&format!("Authenticated as: {}", identity.arn));
    tracing::debug!(
        account = %identity.account,
        region = session.region().unwrap_or("<none>"),
        "session ready"
    );

    console.status("Processing resources...");
    let ctx = RunContext {
        dry_run: args.dry_run,
    };
    let records = script.execute(&session, &ctx).await?;
    tracing::debug!(records = records.len(), "execute phase finished");

    console.write_records(&records);
    let summary = RunSummary {
        total: records.len(),
        dry_run: args.dry_run,
    };
    console.summary(&summary);
    Ok(summary)
}
