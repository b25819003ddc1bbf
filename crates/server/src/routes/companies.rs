use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use tracing::info;

use service::actor::Actor;
use service::company::models::{
    CompanyFilterRequest, CompanyListResponse, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest,
};

use super::positive_id;
use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Substring of the company name
    pub name: Option<String>,
    /// Only companies managed by this user
    pub manager_id: Option<i64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get, path = "/api/v1/companies", tag = "companies",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::CompanyListDoc),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<CompanyListResponse>, JsonApiError> {
    let req = CompanyFilterRequest { name: q.name, manager_id: q.manager_id, page: q.page, per_page: q.per_page };
    let res = state.companies.list(req).await?;
    Ok(Json(res))
}

#[utoipa::path(
    get, path = "/api/v1/companies/{id}", tag = "companies",
    params(("id" = i64, Path, description = "Company ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<CompanyResponse>, JsonApiError> {
    let id = positive_id(id, "company id")?;
    Ok(Json(state.companies.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/v1/companies", tag = "companies",
    request_body = crate::openapi::CreateCompanyDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only superusers may create companies"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), JsonApiError> {
    info!(user_id = actor.user_id, name = %req.name, "company_create_request");
    let created = state.companies.create(&actor, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/companies/{id}", tag = "companies",
    params(("id" = i64, Path, description = "Company ID")),
    request_body = crate::openapi::UpdateCompanyDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Access denied"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyResponse>, JsonApiError> {
    let id = positive_id(id, "company id")?;
    info!(user_id = actor.user_id, company_id = id, "company_update_request");
    Ok(Json(state.companies.update(&actor, id, req).await?))
}

#[utoipa::path(
    delete, path = "/api/v1/companies/{id}", tag = "companies",
    params(("id" = i64, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only superusers may delete companies"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    let id = positive_id(id, "company id")?;
    state.companies.delete(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
