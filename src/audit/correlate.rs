//! Instance/image correlation.
//!
//! Associates each account-owned AMI with the instances launched from it.

use std::collections::HashMap;

use crate::ec2::types::NONE_SENTINEL;
use crate::ec2::{ImageRecord, InstanceRecord};

/// One row of the AMI usage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUsage {
    pub image_id: String,
    pub image_name: String,
    /// `", "`-joined instance descriptors, or `None` when nothing matched.
    pub instances: String,
}

/// Map image id to instance descriptors, preserving instance input order.
///
/// Instances with a missing or empty image id are excluded.
pub fn build_associations(instances: &[InstanceRecord]) -> HashMap<String, Vec<String>> {
    let mut associations: HashMap<String, Vec<String>> = HashMap::new();

    for instance in instances {
        let image_id = match instance.image_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => continue,
        };

        associations
            .entry(image_id.to_string())
            .or_default()
            .push(instance.descriptor());
    }

    associations
}

/// Produce one report row per image, in image input order.
pub fn correlate(instances: &[InstanceRecord], images: &[ImageRecord]) -> Vec<ImageUsage> {
    let associations = build_associations(instances);

    images
        .iter()
        .map(|image| {
            let instances = associations
                .get(&image.image_id)
                .map(|descriptors| descriptors.join(", "))
                .unwrap_or_else(|| NONE_SENTINEL.to_string());

            ImageUsage {
                image_id: image.image_id.clone(),
                image_name: image.display_name().to_string(),
                instances,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(id: &str, name: Option<&str>, image_id: Option<&str>) -> InstanceRecord {
        InstanceRecord {
            instance_id: id.to_string(),
            name: name.map(|n| n.to_string()),
            instance_type: "t3.micro".to_string(),
            state: "running".to_string(),
            public_ip: None,
            private_ip: None,
            security_groups: Vec::new(),
            iam_role: None,
            image_id: image_id.map(|i| i.to_string()),
            alarms: Vec::new(),
        }
    }

    fn image(id: &str, name: &str) -> ImageRecord {
        ImageRecord {
            image_id: id.to_string(),
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn test_instance_without_image_id_is_excluded() {
        let instances = vec![
            instance("i-1", Some("web"), None),
            instance("i-2", Some("db"), Some("ami-1")),
        ];

        let associations = build_associations(&instances);

        assert_eq!(associations.len(), 1);
        assert_eq!(associations["ami-1"], vec!["db (i-2)"]);
    }

    #[test]
    fn test_instance_with_empty_image_id_is_excluded() {
        let instances = vec![instance("i-1", Some("web"), Some(""))];

        assert!(build_associations(&instances).is_empty());
    }

    #[test]
    fn test_each_instance_contributes_exactly_once() {
        let instances = vec![
            instance("i-1", Some("web"), Some("ami-1")),
            instance("i-2", Some("db"), Some("ami-2")),
        ];

        let associations = build_associations(&instances);

        let total: usize = associations.values().map(|v| v.len()).sum();
        assert_eq!(total, 2);
        assert_eq!(associations["ami-1"], vec!["web (i-1)"]);
        assert_eq!(associations["ami-2"], vec!["db (i-2)"]);
    }

    #[test]
    fn test_descriptors_preserve_input_order() {
        let instances = vec![
            instance("i-3", Some("c"), Some("ami-1")),
            instance("i-1", Some("a"), Some("ami-1")),
            instance("i-2", Some("b"), Some("ami-1")),
        ];

        let associations = build_associations(&instances);

        assert_eq!(
            associations["ami-1"],
            vec!["c (i-3)", "a (i-1)", "b (i-2)"]
        );
    }

    #[test]
    fn test_unused_image_renders_none() {
        let rows = correlate(&[], &[image("ami-2", "unused")]);

        assert_eq!(
            rows,
            vec![ImageUsage {
                image_id: "ami-2".to_string(),
                image_name: "unused".to_string(),
                instances: "None".to_string(),
            }]
        );
    }

    #[test]
    fn test_name_falls_back_in_descriptor() {
        let instances = vec![
            instance("i-1", Some("web"), Some("ami-1")),
            instance("i-2", None, Some("ami-1")),
        ];
        let images = vec![image("ami-1", "base")];

        let rows = correlate(&instances, &images);

        assert_eq!(rows[0].instances, "web (i-1), N/A (i-2)");
    }

    #[test]
    fn test_rows_follow_image_input_order() {
        let instances = vec![instance("i-1", Some("web"), Some("ami-2"))];
        let images = vec![image("ami-2", "second"), image("ami-1", "first")];

        let rows = correlate(&instances, &images);

        assert_eq!(rows[0].image_id, "ami-2");
        assert_eq!(rows[0].instances, "web (i-1)");
        assert_eq!(rows[1].image_id, "ami-1");
        assert_eq!(rows[1].instances, "None");
    }

    #[test]
    fn test_image_without_name_renders_not_available() {
        let images = vec![ImageRecord {
            image_id: "ami-1".to_string(),
            name: None,
        }];

        let rows = correlate(&[], &images);

        assert_eq!(rows[0].image_name, "N/A");
    }

    #[test]
    fn test_instances_of_foreign_images_are_kept_out_of_report_rows() {
        // An instance launched from an AMI the account does not own still
        // lands in the mapping, but produces no report row.
        let instances = vec![instance("i-1", Some("web"), Some("ami-foreign"))];
        let images = vec![image("ami-1", "base")];

        let rows = correlate(&instances, &images);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].instances, "None");
    }
}
