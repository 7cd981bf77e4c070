//! EC2 and CloudWatch API boundary.

pub mod client;
pub mod images;
pub mod instances;
pub mod monitoring;
pub mod types;

pub use client::AuditClient;
pub use types::{ImageRecord, InstanceRecord};
