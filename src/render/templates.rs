//! Built-in document templates
//!
//! Every placeholder must be supplied when rendering; the renderer runs in
//! strict mode.

pub const ITEM: &str = r#"<td align="center" valign="top" width="{{width}}"><a href="{{release_url}}" title="{{title}}"><img src="{{preview_url}}" width="240" alt="{{name}}"></a><br/><b>{{name}}</b>{{author_link}}<br/><sub>{{badges}}<a href="{{history_url}}">History</a>{{readme_link}}</sub></td>"#;

pub const ICON_ITEM: &str = r#"<td align="center" valign="top" width="{{width}}"><a href="{{release_url}}" title="{{title}}"><img src="{{preview_url}}" width="240" alt="{{name}}"></a><br/><b>{{name}}</b><br/><sub>from {{owner}}{{completeness}}</sub></td>"#;

pub const GRID: &str = "<table>\n{{rows}}\n</table>";

pub const PAGE: &str = "{{header}}\n\n## {{heading}}\n\n{{summary}}{{grid}}\n{{navigation}}";

pub const INDEX: &str = "{{header}}\n\n# {{title}}\n\n{{counts}}\n\n## Recently added\n\n{{recently_added}}\n\n## Recently updated\n\n{{recently_updated}}\n";

/// Template names paired with their built-in source
pub const BUILTIN: [(&str, &str); 5] = [
    ("item", ITEM),
    ("icon_item", ICON_ITEM),
    ("grid", GRID),
    ("page", PAGE),
    ("index", INDEX),
];
