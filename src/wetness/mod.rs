pub mod model;
pub mod sampling;
