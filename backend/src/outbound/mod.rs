//! Outbound adapters implementing the driven domain ports.
//!
//! - **memory**: process-local registries guarded by `parking_lot` locks.
//!
//! Adapters own storage and atomicity. Lifecycle decisions are delegated to
//! [`crate::domain::issue_lifecycle`].

pub mod memory;
