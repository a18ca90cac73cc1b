//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Registry`) are implemented by outbound adapters and are
//! synchronous. Driving ports (`*Command`, `*Query`) are implemented by the
//! domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod issue_registry;
mod issues_command;
mod issues_query;
mod user_registry;
mod users_command;
mod users_query;

pub use issue_registry::{IssueRegistry, IssueRegistryError};
#[cfg(test)]
pub use issues_command::MockIssuesCommand;
pub use issues_command::IssuesCommand;
#[cfg(test)]
pub use issues_query::MockIssuesQuery;
pub use issues_query::IssuesQuery;
#[cfg(test)]
pub use user_registry::MockUserRegistry;
pub use user_registry::UserRegistry;
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
