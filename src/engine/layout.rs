//! Document chrome shared by category pages and the index

use crate::config::CategoryConfig;
use crate::render::INDEX_PAGE;

/// Cross-category navigation links
///
/// `current` is the id of the category being rendered, or `None` for the
/// index document. Category pages sit one directory below the index.
pub fn render_header(categories: &[CategoryConfig], current: Option<&str>) -> String {
    let prefix = if current.is_some() { "../" } else { "" };

    let mut links = Vec::with_capacity(categories.len() + 1);
    links.push(match current {
        None => "**Home**".to_string(),
        Some(_) => format!("[Home]({}{})", prefix, INDEX_PAGE),
    });

    for category in categories {
        if current == Some(category.id.as_str()) {
            links.push(format!("**{}**", category.title));
        } else {
            links.push(format!(
                "[{}]({}{}/{})",
                category.title, prefix, category.id, INDEX_PAGE
            ));
        }
    }

    links.join(" | ")
}

/// Arrange grid cells into table rows of `columns` cells
pub fn grid_rows(cells: &[String], columns: usize) -> String {
    cells
        .chunks(columns.max(1))
        .map(|row| format!("<tr>\n{}\n</tr>", row.join("\n")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Width attribute giving each of `columns` cells an equal share
pub fn cell_width(columns: usize) -> String {
    format!("{}%", 100 / columns.max(1))
}

/// `Page X of Y — N items available`
pub fn page_summary(page_number: usize, num_pages: usize, total: usize) -> String {
    format!(
        "Page {} of {} — {} items available",
        page_number, num_pages, total
    )
}
