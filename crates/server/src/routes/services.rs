use axum::{
    extract::{Path, State},
    Extension, Json,
};

use service::actor::Actor;
use service::catalog::models::ServiceListResponse;

use super::positive_id;
use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/v1/companies/{id}/services", tag = "services",
    params(("id" = i64, Path, description = "Company ID")),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::ServiceListDoc),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Invalid token"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    actor: Option<Extension<Actor>>,
    Path(company_id): Path<i64>,
) -> Result<Json<ServiceListResponse>, JsonApiError> {
    let company_id = positive_id(company_id, "company id")?;
    let user_id = actor.map(|Extension(a)| a.user_id);
    Ok(Json(state.catalog.list_by_company(company_id, user_id).await?))
}
