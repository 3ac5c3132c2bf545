use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub admins: usize,
}

impl HealthCheckResponse {
    pub fn healthy(admins: usize) -> Self {
        Self {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            admins,
        }
    }
}
