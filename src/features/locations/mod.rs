//! Location catalogue: the infrastructure points shown on the village map.
//!
//! Coordinates are accepted as strings from the admin form and parsed before
//! persistence. Image URLs live in their own table and are fully replaced
//! (delete-all-then-insert) on every edit.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/locations` | No | List all locations |
//! | GET | `/api/locations/{id}` | No | Get one location |
//! | POST | `/api/admin/locations` | Cookie | Create location + images |
//! | PUT | `/api/admin/locations/{id}` | Cookie | Update + replace images |
//! | DELETE | `/api/admin/locations/{id}` | Cookie | Delete (images cascade) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LocationService;
