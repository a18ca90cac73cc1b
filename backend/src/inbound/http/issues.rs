//! Issue API handlers.
//!
//! ```text
//! POST /issue {"title":"Fix bug","assigneeId":1}
//! GET  /issues?status=PENDING
//! GET  /issue/1
//! PUT  /issue/1 {"assigneeId":null}
//! ```
//!
//! Requests name the assignee `assigneeId` (alias `userId`). Responses carry
//! the resolved user under `assignee`, where older clients used `user`.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AssigneeChange, Error, Issue, IssueChanges, IssueId, NewIssue, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, require_text};

/// Request body for `POST /issue`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueRequest {
    #[schema(example = "Fix bug")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Also accepted as `userId`.
    #[serde(default, alias = "userId")]
    #[schema(value_type = Option<u64>, example = 1)]
    pub assignee_id: Option<UserId>,
}

impl CreateIssueRequest {
    fn into_new_issue(self) -> Result<NewIssue, Error> {
        let title = require_text(FieldName::new("title"), self.title)?;
        Ok(NewIssue {
            title,
            description: self.description.unwrap_or_default(),
            assignee: self.assignee_id,
        })
    }
}

/// Request body for `PUT /issue/{id}`.
///
/// `assigneeId` is tri-state: absent leaves the assignee alone, `null`
/// removes it and a number assigns that user.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(example = "IN_PROGRESS")]
    pub status: Option<String>,
    #[serde(
        default,
        alias = "userId",
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<u64>)]
    pub assignee_id: Option<Option<UserId>>,
}

/// Wrap whatever the field holds, including `null`, in `Some`, so that an
/// absent field (serde default `None`) is distinguishable from `null`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateIssueRequest> for IssueChanges {
    fn from(value: UpdateIssueRequest) -> Self {
        Self {
            title: value.title,
            description: value.description,
            status: value.status,
            assignee: AssigneeChange::from(value.assignee_id),
        }
    }
}

/// Query string for `GET /issues`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListIssuesQuery {
    /// Exact status name; empty or absent lists everything.
    pub status: Option<String>,
}

/// Response body for `GET /issues`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssueListResponse {
    pub issues: Vec<Issue>,
}

/// Open an issue.
#[utoipa::path(
    post,
    path = "/issue",
    request_body = CreateIssueRequest,
    responses(
        (status = 201, description = "Issue created", body = Issue),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Assignee not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["issues"],
    operation_id = "createIssue"
)]
#[post("/issue")]
pub async fn create_issue(
    state: web::Data<HttpState>,
    payload: web::Json<CreateIssueRequest>,
) -> ApiResult<HttpResponse> {
    let issue = payload.into_inner().into_new_issue()?;
    let created = state.issues.create_issue(issue).await?;
    Ok(HttpResponse::Created().json(created))
}

/// List issues, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/issues",
    params(ListIssuesQuery),
    responses(
        (status = 200, description = "Issues", body = IssueListResponse),
        (status = 400, description = "Invalid status filter", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["issues"],
    operation_id = "listIssues"
)]
#[get("/issues")]
pub async fn list_issues(
    state: web::Data<HttpState>,
    query: web::Query<ListIssuesQuery>,
) -> ApiResult<web::Json<IssueListResponse>> {
    let issues = state
        .issues_query
        .list_issues(query.into_inner().status)
        .await?;
    Ok(web::Json(IssueListResponse { issues }))
}

/// Fetch one issue.
#[utoipa::path(
    get,
    path = "/issue/{id}",
    params(("id" = u64, Path, description = "Issue identifier")),
    responses(
        (status = 200, description = "Issue", body = Issue),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Issue not found", body = Error)
    ),
    tags = ["issues"],
    operation_id = "getIssue"
)]
#[get("/issue/{id}")]
pub async fn get_issue(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Issue>> {
    let id: IssueId = parse_id(&path.into_inner())?;
    let issue = state.issues_query.get_issue(id).await?;
    Ok(web::Json(issue))
}

/// Apply a partial update under the lifecycle rules.
#[utoipa::path(
    put,
    path = "/issue/{id}",
    params(("id" = u64, Path, description = "Issue identifier")),
    request_body = UpdateIssueRequest,
    responses(
        (status = 200, description = "Updated issue", body = Issue),
        (status = 400, description = "Invalid status or transition", body = Error),
        (status = 404, description = "Issue or assignee not found", body = Error),
        (status = 409, description = "Issue is completed or cancelled", body = Error)
    ),
    tags = ["issues"],
    operation_id = "updateIssue"
)]
#[put("/issue/{id}")]
pub async fn update_issue(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateIssueRequest>,
) -> ApiResult<web::Json<Issue>> {
    let id: IssueId = parse_id(&path.into_inner())?;
    let changes = IssueChanges::from(payload.into_inner());
    let issue = state.issues.update_issue(id, changes).await?;
    Ok(web::Json(issue))
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
