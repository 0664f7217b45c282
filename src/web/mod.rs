//! Server-rendered blog pages.
//!
//! Uses Askama templates from `templates/`. Handlers share services with the
//! JSON API through [`crate::state::AppState`].
//!
//! # Modules
//!
//! - [`handlers`] - Page and form handlers
//! - [`routes`] - Page and form route configuration
//! - [`views`] - Template-ready view models
//! - [`error`] - HTML error pages

pub mod error;
pub mod handlers;
pub mod routes;
pub mod views;
