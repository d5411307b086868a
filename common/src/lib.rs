pub use serde;
pub use toml;

pub mod constants;
pub mod hail_data;
pub mod maths;
pub mod structs;
