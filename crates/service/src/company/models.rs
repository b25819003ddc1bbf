//! Request and response models of the company endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Company, CompanyFilter, CreateCompanyInput, UpdateCompanyInput};
use crate::pagination::{PageInfo, Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCompanyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub manager_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub manager_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyFilterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub manager_id: Option<i64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Company as returned to clients. Manager ids are sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanyResponse>,
    pub pagination: PageInfo,
}

fn validate_ids(ids: &[i64]) -> Result<(), String> {
    if ids.iter().any(|id| *id <= 0) {
        return Err("manager_ids must contain positive ids".into());
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl CreateCompanyRequest {
    /// Payload checks done before the workflow runs.
    pub fn validate(&self) -> Result<(), String> {
        models::company::validate_name(&self.name).map_err(|e| e.to_string())?;
        if let Some(a) = self.address.as_deref() {
            models::company::validate_address(a).map_err(|e| e.to_string())?;
        }
        if let Some(p) = self.phone.as_deref() {
            models::company::validate_phone(p).map_err(|e| e.to_string())?;
        }
        validate_ids(&self.manager_ids)
    }

    pub fn into_create_input(self) -> CreateCompanyInput {
        CreateCompanyInput {
            name: self.name.trim().to_string(),
            description: non_blank(self.description),
            address: non_blank(self.address),
            phone: non_blank(self.phone),
            manager_ids: self.manager_ids,
        }
    }
}

impl UpdateCompanyRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(n) = self.name.as_deref() {
            models::company::validate_name(n).map_err(|e| e.to_string())?;
        }
        if let Some(a) = self.address.as_deref() {
            models::company::validate_address(a).map_err(|e| e.to_string())?;
        }
        if let Some(p) = self.phone.as_deref() {
            models::company::validate_phone(p).map_err(|e| e.to_string())?;
        }
        if let Some(ids) = self.manager_ids.as_deref() {
            validate_ids(ids)?;
        }
        Ok(())
    }

    /// An empty `manager_ids` list counts as "not supplied".
    pub fn into_update_input(self) -> UpdateCompanyInput {
        UpdateCompanyInput {
            name: self.name.map(|n| n.trim().to_string()),
            description: self.description,
            address: self.address,
            phone: self.phone,
            manager_ids: self.manager_ids.filter(|ids| !ids.is_empty()),
        }
    }
}

impl CompanyFilterRequest {
    pub fn into_filter(self) -> CompanyFilter {
        CompanyFilter {
            name: non_blank(self.name),
            manager_id: self.manager_id,
            pagination: Pagination::from_query(self.page, self.per_page),
        }
    }
}

impl CompanyResponse {
    pub fn from_domain(company: Company) -> Self {
        let mut manager_ids = company.manager_ids;
        manager_ids.sort_unstable();
        manager_ids.dedup();
        Self {
            id: company.id,
            name: company.name,
            description: company.description,
            address: company.address,
            phone: company.phone,
            manager_ids,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

impl CompanyListResponse {
    pub fn from_domain(companies: Vec<Company>, pagination: PageInfo) -> Self {
        Self { companies: companies.into_iter().map(CompanyResponse::from_domain).collect(), pagination }
    }
}
