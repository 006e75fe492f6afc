pub mod adaptive;
pub mod config;
pub mod error;
pub mod logging;
pub mod puzzle;
pub mod session;

pub use error::{Error, Result};
