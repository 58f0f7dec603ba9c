/// Script layer: the pluggable execute seam and the phase driver.
pub mod driver;
pub mod errors;

pub use errors::ScriptError;

use crate::aws::SessionContext;
use crate::types::Record;

/// Per-run flags passed to the execute phase.
///
/// `dry_run` is advisory: the driver only changes a banner line, and the
/// concrete script is responsible for skipping or simulating mutating calls
/// when it is set.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    /// Skip or simulate mutating operations.
    pub dry_run: bool,
}

/// The seam where a concrete script inserts its domain logic.
///
/// Implementations receive a validated session and produce the records the
/// driver renders and summarizes. The shipped [`NoopScript`] is the
/// template placeholder.
pub trait Script {
    /// Display name used in the run banner.
    fn name(&self) -> &str;

    /// Execute the script's domain logic against the session.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError`] on any failure; AWS-layer errors convert via
    /// `From<AwsError>` so `?` works on SDK calls wrapped by the AWS layer.
    fn execute(
        &self,
        session: &SessionContext,
        ctx: &RunContext,
    ) -> impl Future<Output = Result<Vec<Record>, ScriptError>>;
}

/// Template placeholder: produces no records.
///
/// Copy this crate, replace `NoopScript` with a type that enumerates or
/// mutates the resources the script is about, and keep everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScript;

impl Script for NoopScript {
    fn name(&self) -> &str {
        "awsops script template"
    }

    async fn execute(
        &self,
        _session: &SessionContext,
        _ctx: &RunContext,
    ) -> Result<Vec<Record>, ScriptError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScript {
        records: Vec<Record>,
    }

    impl Script for FixedScript {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn execute(
            &self,
            _session: &SessionContext,
            _ctx: &RunContext,
        ) -> Result<Vec<Record>, ScriptError> {
            Ok(self.records.clone())
        }
    }

    async fn offline_session() -> SessionContext {
        // Explicit region keeps config loading local: no provider in the
        // chain is consulted beyond the first.
        SessionContext::new(None, Some("us-east-1".to_owned())).await
    }

    #[tokio::test]
    async fn test_noop_script_produces_no_records() {
        let session = offline_session().await;
        let ctx = RunContext { dry_run: false };
        let records = NoopScript.execute(&session, &ctx).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_script_seam_passes_records_through() {
        let session = offline_session().await;
        let ctx = RunContext { dry_run: true };
        let script = FixedScript {
            records: vec![Record::new().with("id", "i-123")],
        };
        let records = script.execute(&session, &ctx).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), Some(&serde_json::json!("i-123")));
    }

    #[tokio::test]
    async fn test_session_keeps_requested_region() {
        let session = offline_session().await;
        assert_eq!(session.region(), Some("us-east-1"));
        assert_eq!(session.profile(), None);
    }
}
