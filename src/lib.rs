pub mod error;
pub mod imaging;
pub mod units;
pub mod vars;
pub mod wetness;

pub use error::{ChartError, Error, InvalidInput, RenderError};
pub use wetness::model::simulate_wetness;
