use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

use service::actor::{Actor, Role};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Claims carried by access tokens issued by the UserService.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub uid: i64,
    pub role: Role,
    pub exp: usize,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Verify an HS256 token and build the actor from its claims.
pub fn decode_actor(secret: &str, token: &str) -> Result<Actor, JsonApiError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    match decode::<Claims>(token, &key, &validation) {
        Ok(data) if data.claims.uid > 0 => Ok(Actor::new(data.claims.uid, data.claims.role)),
        Ok(data) => {
            warn!(uid = data.claims.uid, "token carries a non-positive user id");
            Err(JsonApiError::unauthorized("invalid token"))
        }
        Err(e) => {
            warn!(err = %e, "token validation failed");
            Err(JsonApiError::unauthorized("invalid token"))
        }
    }
}

/// Middleware: reject the request unless it carries a valid bearer token;
/// the resulting `Actor` is stored in the request extensions.
pub async fn require_actor(State(state): State<AppState>, mut req: Request, next: Next) -> Result<Response, JsonApiError> {
    let actor = match bearer_token(req.headers()) {
        Some(token) => decode_actor(&state.auth.jwt_secret, token)?,
        None => {
            warn!(path = %req.uri().path(), "missing bearer token");
            return Err(JsonApiError::unauthorized("missing bearer token"));
        }
    };
    req.extensions_mut().insert(actor);
    Ok(next.run(req).await)
}

/// Middleware: like [`require_actor`] but lets anonymous requests through.
/// A token that is present must still be valid.
pub async fn optional_actor(State(state): State<AppState>, mut req: Request, next: Next) -> Result<Response, JsonApiError> {
    let actor = match bearer_token(req.headers()) {
        Some(token) => Some(decode_actor(&state.auth.jwt_secret, token)?),
        None => None,
    };
    if let Some(actor) = actor {
        req.extensions_mut().insert(actor);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, uid: i64, role: Role, exp: usize) -> String {
        encode(&Header::default(), &Claims { uid, role, exp }, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    fn future_exp() -> usize {
        let now = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().as_secs();
        (now + 3600) as usize
    }

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_none());
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn decodes_valid_token_into_actor() {
        let t = token("s3cret", 7, Role::Superuser, future_exp());
        assert_eq!(decode_actor("s3cret", &t).unwrap(), Actor::superuser(7));
    }

    #[test]
    fn rejects_wrong_secret_and_expired_tokens() {
        let t = token("other", 7, Role::RegularUser, future_exp());
        assert_eq!(decode_actor("s3cret", &t).unwrap_err().status, StatusCode::UNAUTHORIZED);

        let expired = token("s3cret", 7, Role::RegularUser, 1_000);
        assert_eq!(decode_actor("s3cret", &expired).unwrap_err().status, StatusCode::UNAUTHORIZED);
    }
}
