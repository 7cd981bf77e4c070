//! Report table rendering.

use tabled::{Table, Tabled};

use crate::audit::correlate::ImageUsage;
use crate::ec2::types::{NONE_SENTINEL, NOT_AVAILABLE, NO_IAM_ROLE};
use crate::ec2::InstanceRecord;

/// Row for the instance audit table.
#[derive(Tabled)]
struct InstanceRow {
    #[tabled(rename = "INSTANCE ID")]
    instance_id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    instance_type: String,
    #[tabled(rename = "STATE")]
    state: String,
    #[tabled(rename = "PUBLIC IP")]
    public_ip: String,
    #[tabled(rename = "PRIVATE IP")]
    private_ip: String,
    #[tabled(rename = "SECURITY GROUPS")]
    security_groups: String,
    #[tabled(rename = "IAM ROLE")]
    iam_role: String,
    #[tabled(rename = "ALARMS")]
    alarms: String,
}

impl InstanceRow {
    fn from_record(record: &InstanceRecord) -> Self {
        Self {
            instance_id: record.instance_id.clone(),
            name: record.display_name().to_string(),
            instance_type: record.instance_type.clone(),
            state: record.state.clone(),
            public_ip: record
                .public_ip
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            private_ip: record
                .private_ip
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            security_groups: record.security_groups.join(", "),
            iam_role: record
                .iam_role
                .clone()
                .unwrap_or_else(|| NO_IAM_ROLE.to_string()),
            alarms: join_or_none(&record.alarms),
        }
    }
}

/// Row for the AMI usage table.
#[derive(Tabled)]
struct ImageRow {
    #[tabled(rename = "AMI ID")]
    ami_id: String,
    #[tabled(rename = "AMI NAME")]
    name: String,
    #[tabled(rename = "INSTANCES")]
    instances: String,
}

/// Print the instance audit table.
pub fn print_instances(records: &[InstanceRecord]) {
    let rows: Vec<InstanceRow> = records.iter().map(InstanceRow::from_record).collect();
    println!("{}", Table::new(&rows));
}

/// Print the AMI usage table.
pub fn print_image_usage(usage: &[ImageUsage]) {
    let rows: Vec<ImageRow> = usage
        .iter()
        .map(|row| ImageRow {
            ami_id: row.image_id.clone(),
            name: row.image_name.clone(),
            instances: row.instances.clone(),
        })
        .collect();
    println!("{}", Table::new(&rows));
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        NONE_SENTINEL.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InstanceRecord {
        InstanceRecord {
            instance_id: "i-1".to_string(),
            name: None,
            instance_type: "t3.micro".to_string(),
            state: "stopped".to_string(),
            public_ip: None,
            private_ip: Some("10.0.0.5".to_string()),
            security_groups: Vec::new(),
            iam_role: None,
            image_id: None,
            alarms: Vec::new(),
        }
    }

    #[test]
    fn test_row_sentinels_for_missing_fields() {
        let row = InstanceRow::from_record(&record());

        assert_eq!(row.name, "N/A");
        assert_eq!(row.public_ip, "N/A");
        assert_eq!(row.private_ip, "10.0.0.5");
        assert_eq!(row.iam_role, "No IAM Role Attached");
        assert_eq!(row.alarms, "None");
        assert_eq!(row.security_groups, "");
    }

    #[test]
    fn test_row_joins_groups_and_alarms() {
        let mut rec = record();
        rec.security_groups = vec!["web-sg".to_string(), "ssh-sg".to_string()];
        rec.alarms = vec!["CPUUtilization".to_string(), "NetworkIn".to_string()];

        let row = InstanceRow::from_record(&rec);

        assert_eq!(row.security_groups, "web-sg, ssh-sg");
        assert_eq!(row.alarms, "CPUUtilization, NetworkIn");
    }

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "None");
        assert_eq!(join_or_none(&["a".to_string()]), "a");
    }
}
