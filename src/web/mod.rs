//! Web layer serving redirects and the HTML home page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Redirect, add-link and home page handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
