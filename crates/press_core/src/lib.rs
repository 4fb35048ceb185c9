pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigOverrides, PressConfig};
pub use error::PressError;
