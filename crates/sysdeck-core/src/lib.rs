pub mod config;
pub mod dispatch;
pub mod error;
pub mod icons;
pub mod io;
pub mod paths;
pub mod registry;
pub mod types;

pub use error::{Result, SysdeckError};
