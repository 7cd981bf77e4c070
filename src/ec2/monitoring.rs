//! CloudWatch metric lookup for the monitoring column.

use anyhow::Result;
use aws_sdk_cloudwatch::types::{DimensionFilter, Metric};
use tracing::debug;

use super::client::AuditClient;
use crate::error::AuditError;

const EC2_NAMESPACE: &str = "AWS/EC2";
const INSTANCE_ID_DIMENSION: &str = "InstanceId";

/// Fetch the CloudWatch metric names recorded against an instance.
pub async fn fetch_metric_names(client: &AuditClient, instance_id: &str) -> Result<Vec<String>> {
    let dimension = DimensionFilter::builder()
        .name(INSTANCE_ID_DIMENSION)
        .value(instance_id)
        .build();

    let response = client
        .cloudwatch()
        .list_metrics()
        .namespace(EC2_NAMESPACE)
        .dimensions(dimension)
        .send()
        .await
        .map_err(|e| AuditError::aws(module_path!(), e))?;

    let names = metric_names(response.metrics());

    debug!(
        instance_id = %instance_id,
        metric_count = names.len(),
        "Fetched CloudWatch metrics for instance"
    );

    Ok(names)
}

fn metric_names(metrics: &[Metric]) -> Vec<String> {
    metrics
        .iter()
        .filter_map(|m| m.metric_name().map(|s| s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_in_response_order() {
        let metrics = vec![
            Metric::builder().metric_name("CPUUtilization").build(),
            Metric::builder().metric_name("NetworkIn").build(),
            Metric::builder().metric_name("NetworkOut").build(),
        ];

        assert_eq!(
            metric_names(&metrics),
            vec!["CPUUtilization", "NetworkIn", "NetworkOut"]
        );
    }

    #[test]
    fn test_metric_without_name_is_skipped() {
        let metrics = vec![
            Metric::builder().build(),
            Metric::builder().metric_name("StatusCheckFailed").build(),
        ];

        assert_eq!(metric_names(&metrics), vec!["StatusCheckFailed"]);
    }

    #[test]
    fn test_empty_metrics() {
        assert!(metric_names(&[]).is_empty());
    }
}
