//! Core cell dictionary reader module

pub mod convert;
pub mod discover;
pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

pub use reader::ScelReader;
pub use types::error::{Result, ScelError};
