pub mod boundary_service;
pub mod map_service;

pub use boundary_service::BoundaryService;
pub use map_service::MapService;
