pub mod config;
pub mod error;
pub mod labels;

pub use config::*;
pub use error::*;
pub use labels::*;
