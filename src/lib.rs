pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod git;
pub mod image;
pub mod release;
pub mod version;

pub use error::{ReleaseError, Result};
