//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod issues;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register the issue and user routes together with the extractor error
/// handlers. Health probes are registered separately because they need
/// [`health::HealthState`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    error::configure_extractors(cfg);
    cfg.service(issues::create_issue)
        .service(issues::list_issues)
        .service(issues::get_issue)
        .service(issues::update_issue)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(health::health);
}
