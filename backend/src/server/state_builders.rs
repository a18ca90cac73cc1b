//! Builders wiring registries into domain services and HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use crate::domain::ports::UserRegistry;
use crate::domain::{IssueService, UserService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryIssueRegistry, InMemoryUserRegistry};

/// Build the user registry, seeded with the default users when asked.
pub fn build_user_registry(seed_users: bool) -> Arc<InMemoryUserRegistry> {
    if seed_users {
        info!("seeding default users");
        Arc::new(InMemoryUserRegistry::seeded())
    } else {
        Arc::new(InMemoryUserRegistry::new())
    }
}

/// Build HTTP state over fresh in-memory registries.
pub fn build_http_state(seed_users: bool) -> HttpState {
    build_http_state_with_clock(seed_users, Arc::new(DefaultClock))
}

/// Build HTTP state using `clock` for issue timestamps.
pub fn build_http_state_with_clock(seed_users: bool, clock: Arc<dyn Clock>) -> HttpState {
    let users = build_user_registry(seed_users);
    let issues = Arc::new(InMemoryIssueRegistry::new(
        Arc::clone(&users) as Arc<dyn UserRegistry>,
        clock,
    ));

    let issue_service = Arc::new(IssueService::new(issues));
    let user_service = Arc::new(UserService::new(users));

    HttpState::new(HttpStatePorts {
        issues: issue_service.clone(),
        issues_query: issue_service,
        users: user_service.clone(),
        users_query: user_service,
    })
}
