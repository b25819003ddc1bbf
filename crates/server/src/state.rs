use std::sync::Arc;

use service::catalog::repository::CatalogRepository;
use service::catalog::CatalogService;
use service::company::repository::CompanyRepository;
use service::company::CompanyService;
use service::userservice::SuperuserDirectory;

#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: Arc<str>,
}

/// Shared state of the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyService>,
    pub catalog: Arc<CatalogService>,
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        superusers: Arc<dyn SuperuserDirectory>,
        catalog: Arc<dyn CatalogRepository>,
        jwt_secret: &str,
    ) -> Self {
        Self {
            companies: Arc::new(CompanyService::new(companies, superusers)),
            catalog: Arc::new(CatalogService::new(catalog)),
            auth: AuthSettings { jwt_secret: Arc::from(jwt_secret) },
        }
    }
}
