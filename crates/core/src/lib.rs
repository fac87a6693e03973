//! Domain rules for the dive-site backend.
//!
//! Nothing in this crate performs I/O; it holds the types and validation
//! rules shared by the repository layer (`divesite-db`) and the HTTP layer
//! (`divesite-api`).

pub mod article;
pub mod error;
pub mod package;
pub mod pagination;
pub mod roles;
pub mod settings;
pub mod types;
pub mod upload;
pub mod validation;
