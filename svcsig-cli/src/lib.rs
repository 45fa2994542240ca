pub mod commands;
pub mod config;
pub mod error;
pub mod naming;

pub use commands::*;
pub use config::*;
pub use error::*;
pub use naming::*;
