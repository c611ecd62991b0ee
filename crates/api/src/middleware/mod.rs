//! Request extractors for caller identity.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`client_ip::ClientIp`] -- Best-effort client address for view counting.

pub mod auth;
pub mod client_ip;
pub mod rbac;
