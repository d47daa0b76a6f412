//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use utoipa::IntoParams;

use common::{AppError, AppResult};
use domain::{UserRequest, UserResponse, DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET};

use crate::api::extractors::JsonBody;
use crate::api::state::AppState;

/// Paging parameters for the user list.
///
/// Kept as raw strings: unparsable or out-of-range values fall back to the
/// defaults instead of rejecting the request. A repeated key keeps its first
/// value.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Maximum number of users to return (default 50, must be > 0)
    pub limit: Option<String>,
    /// Number of users to skip (default 0, must be >= 0)
    pub offset: Option<String>,
}

impl ListQuery {
    /// Collect paging parameters from decoded query pairs
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "offset" => &mut query.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Effective limit
    pub fn limit(&self) -> u64 {
        self.limit
            .as_deref()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .map(u64::from)
            .unwrap_or(DEFAULT_LIST_LIMIT)
    }

    /// Effective offset
    pub fn offset(&self) -> u64 {
        self.offset
            .as_deref()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map(u64::from)
            .unwrap_or(DEFAULT_LIST_OFFSET)
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse()
        .map_err(|_| AppError::bad_request("invalid user id"))
}

fn log_failure(action: &'static str) -> impl Fn(AppError) -> AppError {
    move |err| {
        tracing::warn!(error = %err, "Failed to {}", action);
        err
    }
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created (age omitted)", body = UserResponse),
        (status = 400, description = "Validation error or malformed body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .user_service
        .create_user(payload)
        .await
        .map_err(log_failure("create user"))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List users with their current age
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListQuery),
    responses(
        (status = 200, description = "Users ordered by ID", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let query = ListQuery::from_pairs(pairs);
    let users = state
        .user_service
        .list_users(query.limit(), query.offset())
        .await
        .map_err(log_failure("list users"))?;

    Ok(Json(users))
}

/// Get a user by ID with their current age
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with age", body = UserResponse),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_id(&id)?;
    let user = state
        .user_service
        .get_user(id)
        .await
        .map_err(log_failure("fetch user"))?;

    Ok(Json(user))
}

/// Replace a user's name and date of birth
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated (age omitted)", body = UserResponse),
        (status = 400, description = "Validation error or invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserRequest>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_id(&id)?;
    let user = state
        .user_service
        .update_user(id, payload)
        .await
        .map_err(log_failure("update user"))?;

    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state
        .user_service
        .delete_user(id)
        .await
        .map_err(log_failure("delete user"))?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>, offset: Option<&str>) -> ListQuery {
        ListQuery {
            limit: limit.map(str::to_string),
            offset: offset.map(str::to_string),
        }
    }

    #[test]
    fn test_list_query_defaults() {
        let q = ListQuery::default();
        assert_eq!(q.limit(), 50);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_list_query_ignores_bad_values() {
        let q = query(Some("-3"), Some("abc"));
        assert_eq!(q.limit(), 50);
        assert_eq!(q.offset(), 0);

        assert_eq!(query(Some("0"), None).limit(), 50);
        assert_eq!(query(None, Some("-1")).offset(), 0);
    }

    #[test]
    fn test_list_query_accepts_valid_values() {
        let q = query(Some("2"), Some("4"));
        assert_eq!(q.limit(), 2);
        assert_eq!(q.offset(), 4);
    }

    #[test]
    fn test_list_query_keeps_first_repeated_value() {
        let pairs = vec![
            ("limit".to_string(), "1".to_string()),
            ("sort".to_string(), "name".to_string()),
            ("limit".to_string(), "2".to_string()),
            ("offset".to_string(), "x".to_string()),
            ("offset".to_string(), "3".to_string()),
        ];

        let q = ListQuery::from_pairs(pairs);
        assert_eq!(q.limit(), 1);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("99999999999").is_err());
    }
}
