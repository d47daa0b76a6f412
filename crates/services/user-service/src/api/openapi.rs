//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{UserRequest, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::update_user,
        crate::api::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            UserRequest,
            UserResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
