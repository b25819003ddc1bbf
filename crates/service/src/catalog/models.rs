use serde::{Deserialize, Serialize};

use super::domain::ServiceItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListResponse {
    pub services: Vec<ServiceResponse>,
}

impl From<ServiceItem> for ServiceResponse {
    fn from(s: ServiceItem) -> Self {
        Self {
            id: s.id,
            company_id: s.company_id,
            name: s.name,
            description: s.description,
            price: s.price,
            duration_minutes: s.duration_minutes,
        }
    }
}

impl ServiceListResponse {
    pub fn from_domain(items: Vec<ServiceItem>) -> Self {
        Self { services: items.into_iter().map(ServiceResponse::from).collect() }
    }
}
