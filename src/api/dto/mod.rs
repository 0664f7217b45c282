//! Data Transfer Objects for API responses.
//!
//! Query parameters are shared with the HTML layer and live in
//! [`crate::application::forms`].

pub mod article;
pub mod health;
pub mod pagination;
