//! Request guards and response middleware.
//!
//! - [`auth::AuthUser`] -- Requires a valid token (Bearer header or session cookie).
//! - [`auth::MaybeAuthUser`] -- Same lookup, but never rejects.
//! - [`origin::reject_disallowed_origin`] -- 403 for origins outside the allow-list.
//! - [`error_detail::attach_error_detail`] -- Adds internal error text to 500s in development.

pub mod auth;
pub mod error_detail;
pub mod origin;
