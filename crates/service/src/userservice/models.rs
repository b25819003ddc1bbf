use serde::{Deserialize, Serialize};

/// Body of `GET /internal/users/superusers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuperUsersResponse {
    pub super_user_ids: Vec<i64>,
}

/// Error body sent by the UserService.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub message: String,
}
