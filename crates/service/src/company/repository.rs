use async_trait::async_trait;

use super::domain::{Company, CompanyFilter, CreateCompanyInput, UpdateCompanyInput};
use crate::errors::RepositoryError;
use crate::pagination::PageInfo;

/// Persistence of companies and their managers.
///
/// Lookups by id report a missing company as `RepositoryError::NotFound`.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, input: CreateCompanyInput) -> Result<Company, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Company, RepositoryError>;
    async fn list(&self, filter: CompanyFilter) -> Result<(Vec<Company>, PageInfo), RepositoryError>;
    async fn update(&self, id: i64, input: UpdateCompanyInput) -> Result<Company, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn is_manager(&self, company_id: i64, user_id: i64) -> Result<bool, RepositoryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use chrono::Utc;

    use crate::company::merge::merge_manager_ids;

    #[derive(Default)]
    struct State {
        companies: BTreeMap<i64, Company>,
        next_id: i64,
    }

    #[derive(Default)]
    pub struct MockCompanyRepository {
        state: Mutex<State>,
        calls: Mutex<HashMap<&'static str, usize>>,
        fail: AtomicBool,
        fail_ops: Mutex<HashSet<&'static str>>,
    }

    impl MockCompanyRepository {
        /// Insert a company as-is, keeping its id.
        pub fn seed(&self, company: Company) {
            let mut state = self.state.lock().unwrap();
            state.next_id = state.next_id.max(company.id);
            state.companies.insert(company.id, company);
        }

        /// Build and insert a company with the given managers.
        pub fn seed_company(&self, id: i64, name: &str, manager_ids: Vec<i64>) -> Company {
            let now = Utc::now();
            let company = Company {
                id,
                name: name.to_string(),
                description: None,
                address: None,
                phone: None,
                manager_ids,
                created_at: now,
                updated_at: now,
            };
            self.seed(company.clone());
            company
        }

        /// Stored company, bypassing call accounting.
        pub fn snapshot(&self, id: i64) -> Option<Company> {
            self.state.lock().unwrap().companies.get(&id).cloned()
        }

        pub fn len(&self) -> usize { self.state.lock().unwrap().companies.len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        /// Number of invocations of `op` (`create`, `update`, ...).
        pub fn calls(&self, op: &str) -> usize {
            self.calls.lock().unwrap().get(op).copied().unwrap_or(0)
        }

        /// Make every following operation fail with a database error.
        pub fn fail_all(&self, fail: bool) { self.fail.store(fail, Ordering::SeqCst); }

        /// Make only `op` fail with a database error; other operations keep working.
        pub fn fail_on(&self, op: &'static str) { self.fail_ops.lock().unwrap().insert(op); }

        fn record(&self, op: &'static str) -> Result<(), RepositoryError> {
            *self.calls.lock().unwrap().entry(op).or_default() += 1;
            if self.fail.load(Ordering::SeqCst) || self.fail_ops.lock().unwrap().contains(op) {
                return Err(RepositoryError::Db(format!("{op}: connection refused")));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CompanyRepository for MockCompanyRepository {
        async fn create(&self, input: CreateCompanyInput) -> Result<Company, RepositoryError> {
            self.record("create")?;
            let mut state = self.state.lock().unwrap();
            state.next_id += 1;
            let now = Utc::now();
            let company = Company {
                id: state.next_id,
                name: input.name,
                description: input.description,
                address: input.address,
                phone: input.phone,
                manager_ids: merge_manager_ids(&input.manager_ids, &[]),
                created_at: now,
                updated_at: now,
            };
            state.companies.insert(company.id, company.clone());
            Ok(company)
        }

        async fn get_by_id(&self, id: i64) -> Result<Company, RepositoryError> {
            self.record("get_by_id")?;
            self.snapshot(id).ok_or(RepositoryError::NotFound("company"))
        }

        async fn list(&self, filter: CompanyFilter) -> Result<(Vec<Company>, PageInfo), RepositoryError> {
            self.record("list")?;
            let state = self.state.lock().unwrap();
            let matching: Vec<Company> = state
                .companies
                .values()
                .filter(|c| filter.name.as_deref().map_or(true, |n| c.name.contains(n)))
                .filter(|c| filter.manager_id.map_or(true, |m| c.manager_ids.contains(&m)))
                .cloned()
                .collect();
            let (page_idx, per_page) = filter.pagination.normalize();
            let page = matching
                .iter()
                .skip((page_idx * per_page) as usize)
                .take(per_page as usize)
                .cloned()
                .collect();
            Ok((page, PageInfo::new(filter.pagination, matching.len() as u64)))
        }

        async fn update(&self, id: i64, input: UpdateCompanyInput) -> Result<Company, RepositoryError> {
            self.record("update")?;
            let mut state = self.state.lock().unwrap();
            let company = state.companies.get_mut(&id).ok_or(RepositoryError::NotFound("company"))?;
            if let Some(n) = input.name { company.name = n; }
            if let Some(d) = input.description { company.description = Some(d); }
            if let Some(a) = input.address { company.address = Some(a); }
            if let Some(p) = input.phone { company.phone = Some(p); }
            if let Some(ids) = input.manager_ids { company.manager_ids = merge_manager_ids(&ids, &[]); }
            company.updated_at = Utc::now();
            Ok(company.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.record("delete")?;
            let mut state = self.state.lock().unwrap();
            state.companies.remove(&id).map(|_| ()).ok_or(RepositoryError::NotFound("company"))
        }

        async fn is_manager(&self, company_id: i64, user_id: i64) -> Result<bool, RepositoryError> {
            self.record("is_manager")?;
            let state = self.state.lock().unwrap();
            let company = state.companies.get(&company_id).ok_or(RepositoryError::NotFound("company"))?;
            Ok(company.manager_ids.contains(&user_id))
        }
    }
}
