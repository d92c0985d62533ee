pub mod location;
pub mod location_image;

pub use location::{Location, LocationWithNames};
pub use location_image::LocationImage;
