//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{MockIssuesCommand, MockIssuesQuery, MockUsersCommand, MockUsersQuery};
use crate::inbound::http::configure;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mocked driving ports. Unconfigured mocks panic when called, so tests only
/// set expectations on the port they exercise.
#[derive(Default)]
pub struct MockPorts {
    pub issues: MockIssuesCommand,
    pub issues_query: MockIssuesQuery,
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
}

impl MockPorts {
    fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            issues: Arc::new(self.issues),
            issues_query: Arc::new(self.issues_query),
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
        })
    }
}

/// App serving every HTTP route over the mocked ports.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .configure(configure)
}
