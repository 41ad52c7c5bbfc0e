//! Domain types and DTOs

pub mod members;

pub use members::*;
