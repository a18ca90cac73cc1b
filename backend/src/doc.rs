//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the handler annotations from the inbound layer.
//! Swagger UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Issue, IssueStatus, User};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::issues::{CreateIssueRequest, IssueListResponse, UpdateIssueRequest};
use crate::inbound::http::users::{CreateUserRequest, UserListResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Issue tracker API",
        description = "Issues with an assignment-driven status lifecycle, plus the users they are assigned to."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::issues::create_issue,
        crate::inbound::http::issues::list_issues,
        crate::inbound::http::issues::get_issue,
        crate::inbound::http::issues::update_issue,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Issue,
        IssueStatus,
        IssueListResponse,
        CreateIssueRequest,
        UpdateIssueRequest,
        User,
        UserListResponse,
        CreateUserRequest,
        Error,
        ErrorCode,
        HealthStatus,
    )),
    tags(
        (name = "issues", description = "Issue lifecycle operations"),
        (name = "users", description = "Registered users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn object_fields(schema: &RefOr<Schema>) -> Vec<String> {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn issue_schema_uses_wire_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let fields = object_fields(schemas.get("Issue").expect("Issue schema"));

        for field in ["id", "title", "status", "assignee", "createdAt", "updatedAt"] {
            assert!(fields.iter().any(|f| f == field), "missing field {field}");
        }
    }

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();

        for path in [
            "/issue",
            "/issues",
            "/issue/{id}",
            "/users",
            "/users/{id}",
            "/health",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
