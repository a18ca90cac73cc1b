//! Request middleware.
//!
//! Purpose: define middleware for request lifecycle concerns. Currently only
//! trace correlation and request logging.

pub mod trace;

pub use trace::Trace;
