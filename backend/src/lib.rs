//! Issue tracker backend library.
//!
//! Hexagonal layout: [`domain`] holds the entities, lifecycle rules, ports
//! and services; [`outbound`] provides the in-memory registries; [`inbound`]
//! exposes them over HTTP; [`server`] wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
