//! Public map view: style catalogue, filtered markers and the boundary
//! overlay.
//!
//! The filtering/selection rules live in [`selection`] as pure functions
//! (tri-state checkbox derivation, bulk category toggles, substring search);
//! [`geo`] holds coordinate parsing and the zoom-to-marker-size step
//! function; [`styles`] the fixed style set. Fly-to animation and style
//! switching happen on the client from the config this feature serves.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/map/config` | No | Center, zooms, style catalogue |
//! | GET | `/api/map/markers` | No | Filtered markers for the view |
//! | GET | `/api/map/layers` | No | Layers panel with tri-state checkboxes |
//! | GET | `/api/map/boundary` | No | Village boundary GeoJSON |

pub mod dtos;
pub mod geo;
pub mod handlers;
pub mod routes;
pub mod selection;
pub mod services;
pub mod styles;

pub use services::{BoundaryService, MapService};
