//! Utilities shared by every crate in the workspace: logging setup and number formatting.

pub mod logger;
mod utils;

pub use crate::utils::prettyprint_usize;
