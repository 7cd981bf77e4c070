//! AMI discovery.

use anyhow::Result;
use tracing::{debug, info};

use super::client::AuditClient;
use super::types::ImageRecord;
use crate::error::AuditError;

/// Fetch the account-owned AMIs, in API response order.
pub async fn fetch_images(client: &AuditClient) -> Result<Vec<ImageRecord>> {
    debug!(region = %client.region(), "Sending DescribeImages API request");

    let response = client
        .ec2()
        .describe_images()
        .owners("self")
        .send()
        .await
        .map_err(|e| AuditError::aws(module_path!(), e))?;

    let images: Vec<ImageRecord> = response
        .images()
        .iter()
        .map(ImageRecord::from_image)
        .collect();

    info!(image_count = images.len(), "Fetched account-owned AMIs");
    Ok(images)
}
