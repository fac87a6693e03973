//! Well-known role name constants.
//!
//! Only the admin role is ever seeded (see the `seed-admin` binary).

pub const ROLE_ADMIN: &str = "ADMIN";
