//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without a real store.

use std::sync::Arc;

use crate::domain::ports::{IssuesCommand, IssuesQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub issues: Arc<dyn IssuesCommand>,
    pub issues_query: Arc<dyn IssuesQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

/// Port bundle used to construct [`HttpState`].
#[derive(Clone)]
pub struct HttpStatePorts {
    pub issues: Arc<dyn IssuesCommand>,
    pub issues_query: Arc<dyn IssuesQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state from the port implementations.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            issues,
            issues_query,
            users,
            users_query,
        } = ports;
        Self {
            issues,
            issues_query,
            users,
            users_query,
        }
    }
}
