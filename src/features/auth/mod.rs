//! Admin gate: a single-shot credential check behind a marker cookie.
//!
//! Submitted credentials are compared with two environment-configured
//! strings; a match sets `admin_auth=1` for eight hours. The admin API is
//! protected by a middleware that only checks for that cookie — there is no
//! hashing, rate limiting or server-side revocation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/login` | No | Verify credentials, set cookie, redirect |
//! | POST | `/api/logout` | No | Clear cookie, redirect to login |

pub mod dto;
pub mod handler;
pub mod routes;
pub mod service;

pub use service::{AuthService, ADMIN_COOKIE_NAME, ADMIN_COOKIE_VALUE};
