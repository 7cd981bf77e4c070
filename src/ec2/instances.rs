//! EC2 instance discovery.

use anyhow::Result;
use tracing::{debug, info};

use super::client::AuditClient;
use super::types::InstanceRecord;
use crate::error::AuditError;

/// Fetch all instances visible to the caller, in API response order.
pub async fn fetch_instances(client: &AuditClient) -> Result<Vec<InstanceRecord>> {
    debug!(region = %client.region(), "Sending DescribeInstances API request");

    let response = client
        .ec2()
        .describe_instances()
        .send()
        .await
        .map_err(|e| AuditError::aws(module_path!(), e))?;

    let instances: Vec<InstanceRecord> = response
        .reservations()
        .iter()
        .flat_map(|r| r.instances())
        .map(InstanceRecord::from_instance)
        .collect();

    info!(instance_count = instances.len(), "Fetched EC2 instances");
    Ok(instances)
}
