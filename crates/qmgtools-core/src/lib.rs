pub mod classify;
pub mod command;
pub mod config;
pub mod error;
pub mod log;
pub mod runner;

pub use error::{Result, UpdateError};
