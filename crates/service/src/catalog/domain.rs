use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service a company offers to its clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Minor currency units.
    pub price: i64,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
