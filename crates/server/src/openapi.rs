use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CreateCompanyDoc {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_ids: Vec<i64>,
}

#[derive(ToSchema)]
pub struct UpdateCompanyDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Replaces the manager set; empty or absent leaves it unchanged
    pub manager_ids: Option<Vec<i64>>,
}

#[derive(ToSchema)]
pub struct CompanyDoc {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_ids: Vec<i64>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct PageInfoDoc {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(ToSchema)]
pub struct CompanyListDoc {
    pub companies: Vec<CompanyDoc>,
    pub pagination: PageInfoDoc,
}

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Minor currency units
    pub price: i64,
    pub duration_minutes: i32,
}

#[derive(ToSchema)]
pub struct ServiceListDoc {
    pub services: Vec<ServiceDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::services::list,
    ),
    components(
        schemas(
            HealthResponse,
            CreateCompanyDoc,
            UpdateCompanyDoc,
            CompanyDoc,
            PageInfoDoc,
            CompanyListDoc,
            ServiceDoc,
            ServiceListDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "services")
    )
)]
pub struct ApiDoc;
