/// The five environment probes.
///
/// Each probe is independent and order-independent, returning a
/// [`CheckResult`] the report renders. Only `required` probes gate the
/// ready verdict; account-level probes (credentials, connectivity) are
/// advisory because scripts may target a different profile than the one
/// visible to the doctor.
use std::path::Path;
use std::process::Command;

use aws_config::SdkConfig;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_sts::error::DisplayErrorContext;

/// Minimum toolchain version for building scripts from this template.
pub const MIN_RUST_VERSION: (u32, u32, u32) = (1, 85, 0);

/// Crates every script built from this template depends on, cross-checked
/// against the workspace manifest.
pub const REQUIRED_CRATES: &[&str] = &[
    "aws-config",
    "aws-sdk-sts",
    "clap",
    "comfy-table",
    "csv",
    "serde",
    "serde_json",
    "tokio",
    "tracing",
];

/// Probe outcome level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The probe succeeded.
    Pass,
    /// The probe failed but does not block readiness.
    Warn,
    /// The probe failed and blocks readiness when required.
    Fail,
}

impl CheckStatus {
    /// Report marker for this status.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Pass => "✓ PASS",
            Self::Warn => "⚠ WARN",
            Self::Fail => "✗ FAIL",
        }
    }
}

/// One probe's outcome.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Report row label.
    pub name: &'static str,
    /// Outcome level.
    pub status: CheckStatus,
    /// Human-readable detail for the report.
    pub detail: String,
    /// Whether a non-pass outcome blocks the ready verdict.
    pub required: bool,
    /// Remediation hint printed below the report on failure.
    pub hint: Option<String>,
}

impl CheckResult {
    fn required(name: &'static str, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name,
            status,
            detail: detail.into(),
            required: true,
            hint: None,
        }
    }

    fn advisory(name: &'static str, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name,
            status,
            detail: detail.into(),
            required: false,
            hint: None,
        }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Probe 1: the installed `rustc` meets the minimum version, compared as
/// numeric component tuples.
#[must_use]
pub fn toolchain() -> CheckResult {
    let name = "Rust toolchain";
    match Command::new("rustc").arg("--version").output() {
        Ok(output) if output.status.success() => {
            let text = String::from_utf8_lossy(&output.stdout);
            match parse_rustc_version(&text) {
                Some(found) => {
                    let detail = format!(
                        "rustc {}.{}.{} (requires {}.{}+)",
                        found.0, found.1, found.2, MIN_RUST_VERSION.0, MIN_RUST_VERSION.1
                    );
                    if version_at_least(found, MIN_RUST_VERSION) {
                        CheckResult::required(name, CheckStatus::Pass, detail)
                    } else {
                        CheckResult::required(name, CheckStatus::Fail, detail)
                            .with_hint("Update the toolchain with: rustup update stable")
                    }
                }
                None => CheckResult::required(
                    name,
                    CheckStatus::Fail,
                    format!("could not parse `rustc --version` output: {}", text.trim()),
                ),
            }
        }
        _ => CheckResult::required(name, CheckStatus::Fail, "rustc not found on PATH")
            .with_hint("Install Rust from https://rustup.rs"),
    }
}

/// Probe 2: a `.env` secrets file exists in `dir`. Contents are not parsed.
#[must_use]
pub fn env_file(dir: &Path) -> CheckResult {
    let name = "Secrets file";
    if dir.join(".env").exists() {
        CheckResult::advisory(name, CheckStatus::Pass, ".env file exists")
    } else {
        CheckResult::advisory(
            name,
            CheckStatus::Warn,
            ".env file not found (copy from .env.example)",
        )
    }
}

/// Probe 3: every required crate is declared in the `[dependencies]` table
/// of the manifest in `dir`.
#[must_use]
pub fn required_crates(dir: &Path) -> CheckResult {
    let name = "Required crates";
    let path = dir.join("Cargo.toml");
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => {
            return CheckResult::required(
                name,
                CheckStatus::Fail,
                format!("no Cargo.toml at {}", path.display()),
            );
        }
    };
    match missing_crates(&text) {
        Ok(missing) if missing.is_empty() => CheckResult::required(
            name,
            CheckStatus::Pass,
            "all required crates declared",
        ),
        Ok(missing) => {
            let hint = format!("Add the missing crates with: cargo add {}", missing.join(" "));
            CheckResult::required(
                name,
                CheckStatus::Fail,
                format!("missing: {}", missing.join(", ")),
            )
            .with_hint(hint)
        }
        Err(err) => CheckResult::required(
            name,
            CheckStatus::Fail,
            format!("Cargo.toml is not valid TOML: {err}"),
        ),
    }
}

/// Probe 4: the default session resolves credentials. No identity call.
pub async fn credentials(config: &SdkConfig) -> CheckResult {
    let name = "AWS credentials";
    match config.credentials_provider() {
        Some(provider) => match provider.provide_credentials().await {
            Ok(_) => CheckResult::advisory(name, CheckStatus::Pass, "AWS credentials found"),
            Err(err) => CheckResult::advisory(
                name,
                CheckStatus::Warn,
                format!("no usable AWS credentials: {err}"),
            ),
        },
        None => CheckResult::advisory(name, CheckStatus::Warn, "no credentials provider configured"),
    }
}

/// Probe 5: one live `sts:GetCallerIdentity` round trip.
pub async fn connectivity(config: &SdkConfig) -> CheckResult {
    let name = "AWS connectivity";
    let client = aws_sdk_sts::Client::new(config);
    match client.get_caller_identity().send().await {
        Ok(identity) => CheckResult::advisory(
            name,
            CheckStatus::Pass,
            format!("connected as: {}", identity.arn().unwrap_or("<unknown>")),
        ),
        Err(err) => CheckResult::advisory(
            name,
            CheckStatus::Warn,
            format!("cannot reach AWS: {}", DisplayErrorContext(&err)),
        ),
    }
}

/// The ready verdict: every required probe passed. Advisory outcomes never
/// change it.
#[must_use]
pub fn is_ready(results: &[CheckResult]) -> bool {
    results
        .iter()
        .all(|result| !result.required || result.status == CheckStatus::Pass)
}

/// Parse `rustc --version` output ("rustc 1.85.0 (abcdef 2025-01-01)") into
/// numeric components. Channel suffixes like `-nightly` are ignored.
fn parse_rustc_version(text: &str) -> Option<(u32, u32, u32)> {
    let token = text.split_whitespace().nth(1)?;
    let numeric = token.split('-').next()?;
    let mut parts = numeric.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next().unwrap_or("0").parse().ok()?;
    Some((major, minor, patch))
}

/// Numeric tuple comparison, never lexicographic.
fn version_at_least(found: (u32, u32, u32), minimum: (u32, u32, u32)) -> bool {
    found >= minimum
}

/// Required crates absent from the manifest's `[dependencies]` table.
fn missing_crates(manifest: &str) -> Result<Vec<String>, toml::de::Error> {
    let value: toml::Value = toml::from_str(manifest)?;
    let declared = value.get("dependencies").and_then(toml::Value::as_table);
    let missing = REQUIRED_CRATES
        .iter()
        .filter(|name| match declared {
            Some(table) => !table.contains_key(**name),
            None => true,
        })
        .map(|name| (*name).to_owned())
        .collect();
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_comparison_is_numeric() {
        let minimum = (1, 75, 0);
        assert!(!version_at_least((1, 74, 3), minimum));
        assert!(version_at_least((1, 75, 0), minimum));
        assert!(version_at_least((1, 82, 1), minimum));
        // 9 < 75 numerically even though "9" > "7" lexicographically.
        assert!(!version_at_least((1, 9, 0), minimum));
        assert!(version_at_least((2, 0, 0), minimum));
    }

    #[test]
    fn test_parse_rustc_version_shapes() {
        assert_eq!(
            parse_rustc_version("rustc 1.85.0 (4d91de4e4 2025-02-17)"),
            Some((1, 85, 0))
        );
        assert_eq!(
            parse_rustc_version("rustc 1.92.1-nightly (abcdef123 2025-11-01)"),
            Some((1, 92, 1))
        );
        assert_eq!(parse_rustc_version("rustc 1.85"), Some((1, 85, 0)));
        assert_eq!(parse_rustc_version("not a version"), None);
        assert_eq!(parse_rustc_version(""), None);
    }

    #[test]
    fn test_missing_crates_reports_absent_names() {
        let manifest = r#"
            [package]
            name = "scripts"

            [dependencies]
            aws-config = "1"
            aws-sdk-sts = "1"
            clap = { version = "4", features = ["derive"] }
            comfy-table = "7"
            csv = "1"
            serde = "1"
            serde_json = "1"
        "#;
        let missing = missing_crates(manifest).unwrap();
        assert_eq!(missing, ["tokio", "tracing"]);
    }

    #[test]
    fn test_missing_crates_full_manifest_passes() {
        let manifest = REQUIRED_CRATES
            .iter()
            .fold(String::from("[dependencies]\n"), |mut acc, name| {
                acc.push_str(&format!("{name} = \"1\"\n"));
                acc
            });
        assert!(missing_crates(&manifest).unwrap().is_empty());
    }

    #[test]
    fn test_missing_crates_without_dependency_table() {
        let missing = missing_crates("[package]\nname = \"scripts\"\n").unwrap();
        assert_eq!(missing.len(), REQUIRED_CRATES.len());
    }

    #[test]
    fn test_env_file_probe() {
        let dir = tempfile::tempdir().unwrap();
        let result = env_file(dir.path());
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(!result.required);

        std::fs::write(dir.path().join(".env"), "AWS_PROFILE=dev\n").unwrap();
        let result = env_file(dir.path());
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn test_required_crates_probe_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let result = required_crates(dir.path());
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.required);
    }

    #[test]
    fn test_ready_verdict_ignores_advisory_outcomes() {
        let results = vec![
            CheckResult::required("toolchain", CheckStatus::Pass, "ok"),
            CheckResult::required("crates", CheckStatus::Pass, "ok"),
            CheckResult::advisory("secrets", CheckStatus::Warn, "missing"),
            CheckResult::advisory("credentials", CheckStatus::Warn, "missing"),
            CheckResult::advisory("connectivity", CheckStatus::Warn, "offline"),
        ];
        assert!(is_ready(&results));
    }

    #[test]
    fn test_ready_verdict_blocks_on_required_failure() {
        let results = vec![
            CheckResult::required("toolchain", CheckStatus::Fail, "old"),
            CheckResult::required("crates", CheckStatus::Pass, "ok"),
            CheckResult::advisory("connectivity", CheckStatus::Pass, "ok"),
        ];
        assert!(!is_ready(&results));
    }
}
