use super::CommandHandler;
use crate::render::page_name;
use crate::{CatalogError, Result};

/// Handler for the `page-name` command
pub struct PageNameCommand {
    pub page: usize,
    pub num_pages: usize,
}

impl CommandHandler for PageNameCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.file_name()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "page-name"
    }
}

impl PageNameCommand {
    pub fn new(page: usize, num_pages: usize) -> Self {
        Self { page, num_pages }
    }

    pub fn file_name(&self) -> Result<String> {
        if self.page >= self.num_pages {
            return Err(CatalogError::Config(format!(
                "Page {} is out of range for {} pages",
                self.page, self.num_pages
            )));
        }
        Ok(page_name(self.page, self.num_pages))
    }
}
