//! Optional-field records built from SDK response shapes.
//!
//! Response shapes are absent-tolerant; every optional field is normalized
//! here so the audit logic never touches raw SDK types.

use aws_sdk_ec2::types::{Image, Instance};

/// Fallback shown when an optional display field is absent.
pub const NOT_AVAILABLE: &str = "N/A";
/// Shown when an instance has no IAM instance profile attached.
pub const NO_IAM_ROLE: &str = "No IAM Role Attached";
/// Shown for an empty association or alarm list.
pub const NONE_SENTINEL: &str = "None";

const TAG_NAME: &str = "Name";

/// One EC2 instance, as audited.
#[derive(Debug, Clone)]
pub struct InstanceRecord {
    pub instance_id: String,
    pub name: Option<String>,
    pub instance_type: String,
    pub state: String,
    pub public_ip: Option<String>,
    pub private_ip: Option<String>,
    pub security_groups: Vec<String>,
    pub iam_role: Option<String>,
    pub image_id: Option<String>,
    /// CloudWatch metric names, filled by the monitoring lookup.
    pub alarms: Vec<String>,
}

impl InstanceRecord {
    /// Build a record from a DescribeInstances response entry.
    pub fn from_instance(instance: &Instance) -> Self {
        Self {
            instance_id: instance.instance_id().unwrap_or("unknown").to_string(),
            name: find_tag_value(instance.tags(), TAG_NAME),
            instance_type: instance
                .instance_type()
                .map(|t| t.as_str())
                .unwrap_or("unknown")
                .to_string(),
            state: instance
                .state()
                .and_then(|s| s.name())
                .map(|n| n.as_str())
                .unwrap_or("unknown")
                .to_string(),
            public_ip: instance.public_ip_address().map(|s| s.to_string()),
            private_ip: instance.private_ip_address().map(|s| s.to_string()),
            security_groups: instance
                .security_groups()
                .iter()
                .filter_map(|sg| sg.group_name().map(|s| s.to_string()))
                .collect(),
            iam_role: instance
                .iam_instance_profile()
                .and_then(|p| p.arn())
                .map(|s| s.to_string()),
            image_id: instance.image_id().map(|s| s.to_string()),
            alarms: Vec::new(),
        }
    }

    /// Display name with the `N/A` fallback when no Name tag is present.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Human-readable descriptor used in the AMI usage report.
    pub fn descriptor(&self) -> String {
        format!("{} ({})", self.display_name(), self.instance_id)
    }
}

/// One account-owned AMI, as audited.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub image_id: String,
    pub name: Option<String>,
}

impl ImageRecord {
    /// Build a record from a DescribeImages response entry.
    pub fn from_image(image: &Image) -> Self {
        Self {
            image_id: image.image_id().unwrap_or("unknown").to_string(),
            name: image.name().map(|s| s.to_string()),
        }
    }

    /// Display name with the `N/A` fallback.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

fn find_tag_value(tags: &[aws_sdk_ec2::types::Tag], key: &str) -> Option<String> {
    tags.iter()
        .find(|tag| tag.key() == Some(key))
        .and_then(|tag| tag.value())
        .map(|v| v.to_string())
}
