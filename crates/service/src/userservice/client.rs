use std::time::Duration;

use reqwest::StatusCode;
use tracing::{error, info, instrument, warn};

use super::errors::UserServiceError;
use super::models::{ErrorResponse, SuperUsersResponse};

pub const SUPERUSERS_PATH: &str = "/internal/users/superusers";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client of the UserService.
#[derive(Clone, Debug)]
pub struct UserServiceClient {
    base_url: String,
    http: reqwest::Client,
}

impl UserServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UserServiceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UserServiceError::Internal(format!("failed to build http client: {e}")))?;
        Ok(Self::with_http_client(base_url, http))
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    /// Call `GET /internal/users/superusers`.
    ///
    /// 404 maps to `SuperusersNotFound`; transport failures to `Internal`;
    /// other statuses and bad bodies to `InvalidResponse`.
    pub async fn get_superusers(&self) -> Result<Vec<i64>, UserServiceError> {
        let url = format!("{}{}", self.base_url, SUPERUSERS_PATH);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| UserServiceError::Internal(format!("failed to execute request: {e}")))?;

        match resp.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(UserServiceError::SuperusersNotFound),
            status => {
                let body = resp.text().await.unwrap_or_default();
                let detail = match serde_json::from_str::<ErrorResponse>(&body) {
                    Ok(err) => format!("{} (code {})", err.message, err.code),
                    Err(_) => body,
                };
                return Err(UserServiceError::InvalidResponse(format!(
                    "unexpected status code {}: {}",
                    status.as_u16(),
                    detail
                )));
            }
        }

        let body = resp
            .json::<SuperUsersResponse>()
            .await
            .map_err(|e| UserServiceError::InvalidResponse(format!("failed to decode response: {e}")))?;
        Ok(body.super_user_ids)
    }

    /// Same as [`get_superusers`](Self::get_superusers), but every failure
    /// except `SuperusersNotFound` becomes `Degraded` so that callers can
    /// continue without the superuser list.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get_superusers_with_graceful_degradation(&self) -> Result<Vec<i64>, UserServiceError> {
        info!("fetching superusers list from UserService");

        match self.get_superusers().await {
            Ok(ids) => {
                info!(count = ids.len(), "fetched superusers from UserService");
                Ok(ids)
            }
            Err(UserServiceError::SuperusersNotFound) => {
                warn!("superusers not found in UserService");
                Err(UserServiceError::SuperusersNotFound)
            }
            Err(e) => {
                error!(error = %e, "UserService unavailable, applying graceful degradation");
                Err(UserServiceError::Degraded(e.to_string()))
            }
        }
    }
}
