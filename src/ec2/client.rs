//! AWS SDK client wrapper shared by the audit steps.

use anyhow::Result;
use aws_sdk_cloudwatch::Client as CloudWatchClient;
use aws_sdk_ec2::Client as Ec2Client;
use aws_sdk_sts::Client as StsClient;
use tracing::{debug, warn};

/// Service clients for one audit session.
pub struct AuditClient {
    ec2: Ec2Client,
    cloudwatch: CloudWatchClient,
    sts: StsClient,
    region: String,
}

impl AuditClient {
    /// Create the service clients from the shared AWS configuration.
    pub async fn new(profile: Option<&str>, region: Option<&str>) -> Result<Self> {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(profile) = profile {
            debug!("Using AWS profile: {}", profile);
            config_loader = config_loader.profile_name(profile);
        }

        if let Some(region) = region {
            debug!("Using AWS region: {}", region);
            config_loader = config_loader.region(aws_config::Region::new(region.to_string()));
        }

        let config = config_loader.load().await;
        let region = config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        debug!(region = %region, "AWS service clients initialized");

        Ok(Self {
            ec2: Ec2Client::new(&config),
            cloudwatch: CloudWatchClient::new(&config),
            sts: StsClient::new(&config),
            region,
        })
    }

    /// Get the underlying AWS SDK EC2 client.
    pub fn ec2(&self) -> &Ec2Client {
        &self.ec2
    }

    /// Get the underlying AWS SDK CloudWatch client.
    pub fn cloudwatch(&self) -> &CloudWatchClient {
        &self.cloudwatch
    }

    /// Get the resolved AWS region string.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Account id of the current credentials, if resolvable.
    ///
    /// Identity lookup failure is not fatal; permission problems surface
    /// per audit step instead.
    pub async fn account_id(&self) -> Option<String> {
        match self.sts.get_caller_identity().send().await {
            Ok(identity) => identity.account().map(|s| s.to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to resolve caller identity");
                None
            }
        }
    }
}
