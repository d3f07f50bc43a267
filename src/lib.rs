pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod io;
pub mod render;

pub use error::{CatalogError, Result};
