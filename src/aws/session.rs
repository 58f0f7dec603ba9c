/// Session construction and credential validation.
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};

use super::errors::AwsError;
use crate::types::CallerIdentity;

/// A session bound to an optional profile and region, holding the loaded
/// SDK configuration.
///
/// Created once per invocation and read-only afterward; scripts build their
/// service clients from [`SessionContext::config`].
#[derive(Debug)]
pub struct SessionContext {
    profile: Option<String>,
    config: SdkConfig,
}

impl SessionContext {
    /// Load shared AWS configuration for the given profile and region, each
    /// falling back to the environment default when absent.
    pub async fn new(profile: Option<String>, region: Option<String>) -> Self {
        let region_provider =
            RegionProviderChain::first_try(region.map(Region::new)).or_default_provider();
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(name) = &profile {
            loader = loader.profile_name(name);
        }
        let config = loader.load().await;
        Self { profile, config }
    }

    /// The selected profile name, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// The resolved region, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.config.region().map(|region| region.as_ref())
    }

    /// The loaded SDK configuration, for building service clients.
    #[must_use]
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Confirm the session's credentials resolve to a valid principal with
    /// one `sts:GetCallerIdentity` call. No retries: any failure is
    /// surfaced to the caller, which treats it as fatal.
    ///
    /// # Errors
    ///
    /// Returns [`AwsError::Service`] for a structured STS error,
    /// [`AwsError::Transport`] for connection-level failures, and
    /// [`AwsError::MissingIdentity`] if the response has no ARN.
    pub async fn validate_credentials(&self) -> Result<CallerIdentity, AwsError> {
        let client = aws_sdk_sts::Client::new(&self.config);
        let output = client.get_caller_identity().send().await?;
        let arn = output
            .arn()
            .map(str::to_owned)
            .ok_or(AwsError::MissingIdentity)?;
        Ok(CallerIdentity {
            account: output.account().unwrap_or_default().to_owned(),
            arn,
            user_id: output.user_id().unwrap_or_default().to_owned(),
        })
    }
}
