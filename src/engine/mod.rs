//! Generation engine
//!
//! Turns the catalog into the document set: one paginated grid per category
//! and an index page summarizing counts and recent activity.

pub mod assembler;
pub mod layout;

pub use assembler::{Assembler, CategorySummary, Generation, GenerationReport};
