//! Category management for the location catalogue.
//!
//! Categories group locations on the map layers panel; each carries an
//! ordered set of subcategories that exists only through the category's own
//! form. Deleting a category cascades to its subcategories and the locations
//! referencing them at the database level.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List categories with subcategories |
//! | GET | `/api/admin/categories` | Cookie | Same list for the admin table |
//! | POST | `/api/admin/categories` | Cookie | Create category + subcategories |
//! | GET | `/api/admin/categories/{id}` | Cookie | Get one category |
//! | PUT | `/api/admin/categories/{id}` | Cookie | Update + reconcile subcategories |
//! | DELETE | `/api/admin/categories/{id}` | Cookie | Delete (cascades) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
