//! Paged listing backend
//!
//! The [`pagination`] module holds the paging core: page state, the overfetch
//! paginator, default ordering, and the navigation window with its renderer.
//! The remaining modules are the HTTP service built around it.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod pagination;
pub mod routes;
