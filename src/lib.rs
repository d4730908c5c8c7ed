pub mod artifacts;
pub mod config;
pub mod deployer;
pub mod error;
pub mod framework;
pub mod runner;
pub mod utils;

pub type Result<T> = std::result::Result<T, error::Error>;
