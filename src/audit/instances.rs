//! EC2 instance audit step.

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::ec2::{self, AuditClient};
use crate::output::table;

/// Fetch instances, enrich them with CloudWatch metrics, and print the report.
pub async fn run(client: &AuditClient) -> Result<()> {
    let mut instances = ec2::instances::fetch_instances(client).await?;

    for instance in &mut instances {
        instance.alarms =
            ec2::monitoring::fetch_metric_names(client, &instance.instance_id).await?;
    }

    if instances.is_empty() {
        println!("{}", "No instances found.".yellow());
        return Ok(());
    }

    println!("\n{}", "EC2 Instances Audit Results:".bold());
    table::print_instances(&instances);

    info!(
        instance_count = instances.len(),
        "EC2 instance audit completed"
    );

    Ok(())
}
