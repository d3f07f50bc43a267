pub mod navigation;
pub mod paginate;
pub mod template;
pub mod templates;

pub use navigation::render_navigation;
pub use paginate::{page_count, page_name, Page, Paginator, INDEX_PAGE};
pub use template::{TemplateRenderer, Vars};
