//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

use serde::{Deserialize, Serialize};

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane defaults and convert to `u64`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }

    /// Build from optional query values.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Self {
        let d = Self::default();
        Self { page: page.unwrap_or(d.page), per_page: per_page.unwrap_or(d.per_page) }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}

/// Page metadata returned with listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PageInfo {
    pub fn new(pagination: Pagination, total: u64) -> Self {
        let (idx, per_page) = pagination.normalize();
        Self { page: idx + 1, per_page, total, total_pages: total.div_ceil(per_page) }
    }
}
