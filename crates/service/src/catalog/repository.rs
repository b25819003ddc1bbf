use async_trait::async_trait;

use super::domain::ServiceItem;
use crate::errors::RepositoryError;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Services of a company ordered by id; empty when there are none.
    async fn list_by_company(&self, company_id: i64) -> Result<Vec<ServiceItem>, RepositoryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use chrono::Utc;

    #[derive(Default)]
    pub struct MockCatalogRepository {
        items: Mutex<Vec<ServiceItem>>,
        fail: AtomicBool,
    }

    impl MockCatalogRepository {
        pub fn seed(&self, company_id: i64, name: &str, price: i64, duration_minutes: i32) -> ServiceItem {
            let mut items = self.items.lock().unwrap();
            let now = Utc::now();
            let item = ServiceItem {
                id: items.len() as i64 + 1,
                company_id,
                name: name.to_string(),
                description: None,
                price,
                duration_minutes,
                created_at: now,
                updated_at: now,
            };
            items.push(item.clone());
            item
        }

        pub fn fail_all(&self, fail: bool) { self.fail.store(fail, Ordering::SeqCst); }
    }

    #[async_trait]
    impl CatalogRepository for MockCatalogRepository {
        async fn list_by_company(&self, company_id: i64) -> Result<Vec<ServiceItem>, RepositoryError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RepositoryError::Db("list_by_company: connection refused".into()));
            }
            let items = self.items.lock().unwrap();
            Ok(items.iter().filter(|s| s.company_id == company_id).cloned().collect())
        }
    }
}
