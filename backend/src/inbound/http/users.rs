//! Users API handlers.
//!
//! ```text
//! GET  /users
//! POST /users {"name":"Ada","email":"ada@example.com"}
//! GET  /users/1
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, require_text};

/// Request body for `POST /users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "김개발")]
    pub name: Option<String>,
    #[schema(example = "kim@example.com")]
    pub email: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let name = require_text(FieldName::new("name"), value.name)?;
        let email = require_text(FieldName::new("email"), value.email)?;
        Ok(NewUser { name, email })
    }
}

/// Response body for `GET /users`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// List registered users in identifier order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use issue_tracker::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = UserListResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UserListResponse>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(UserListResponse { users }))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = NewUser::try_from(payload.into_inner())?;
    let created = state.users.create_user(user).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_id(&path.into_inner())?;
    let user = state.users_query.get_user(id).await?;
    Ok(web::Json(user))
}
