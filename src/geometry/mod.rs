pub mod polygon;
pub mod types;
pub mod utils;
