pub mod fs;
pub mod paths;
pub mod writer;

pub use paths::PathUtils;
pub use writer::{Document, DocumentWriter, BANNER};
