use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Company as stored (business view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Unique user ids; order carries no meaning.
    pub manager_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a company to create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCompanyInput {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_ids: Vec<i64>,
}

/// Changes to apply; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCompanyInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// `Some` replaces the whole manager set.
    pub manager_ids: Option<Vec<i64>>,
}

/// Listing filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    /// Substring of the company name.
    pub name: Option<String>,
    /// Only companies managed by this user.
    pub manager_id: Option<i64>,
    pub pagination: Pagination,
}
