pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use domain::{select_latest, BumpKind, Version};
pub use error::{BumpError, Result};
