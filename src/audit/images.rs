//! AMI usage audit step.

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use super::correlate;
use crate::ec2::{self, AuditClient};
use crate::output::table;

/// Fetch instances and account-owned AMIs, correlate, and print the report.
pub async fn run(client: &AuditClient) -> Result<()> {
    let instances = ec2::instances::fetch_instances(client).await?;
    let images = ec2::images::fetch_images(client).await?;

    if images.is_empty() {
        println!("{}", "No images found.".yellow());
        return Ok(());
    }

    let usage = correlate::correlate(&instances, &images);

    println!("\n{}", "AMI Usage Audit Results:".bold());
    table::print_image_usage(&usage);

    info!(
        image_count = images.len(),
        instance_count = instances.len(),
        "AMI usage audit completed"
    );

    Ok(())
}
