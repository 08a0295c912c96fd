//! Middleware applied to the go link routes.

pub mod tracing;
