//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 access-token generation and validation.
//! - [`cookie`] -- the HTTP-only session cookie carrying the access token.

pub mod cookie;
pub mod jwt;
pub mod password;
