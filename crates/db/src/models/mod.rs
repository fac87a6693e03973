//! Row models and input DTOs, one module per table.

pub mod article;
pub mod dashboard;
pub mod gallery;
pub mod package;
pub mod setting;
pub mod submission;
pub mod testimonial;
pub mod user;
