//! Domain layer containing business entities and logic.
//!
//! This module defines entities, repository interfaces and the pure rules of
//! the blog, independent of storage and presentation.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`search`] - Article predicates and search form rules
//! - [`pagination`] - Page windows with orphan merging
//! - [`tags`] - Comma-separated tag field parsing
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod pagination;
pub mod repositories;
pub mod search;
pub mod tags;
