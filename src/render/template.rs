use super::templates::BUILTIN;
use crate::Result;
use anyhow::Context;
use handlebars::Handlebars;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Placeholder values for one render call
pub type Vars<'a> = BTreeMap<&'a str, String>;

/// Named templates with strict placeholder substitution
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Renderer loaded with the built-in templates
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Output is markdown with inline HTML, values are pre-escaped
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for (name, source) in BUILTIN {
            handlebars.register_template_string(name, source)?;
        }

        Ok(Self { handlebars })
    }

    /// Renderer with any `<name>.hbs` in `dir` replacing the built-in of that name
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        let mut renderer = Self::new()?;

        for (name, _) in BUILTIN {
            let path = dir.join(format!("{}.hbs", name));
            if path.is_file() {
                info!("Using template override {:?}", path);
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read template override {:?}", path))?;
                renderer.handlebars.register_template_string(name, source)?;
            }
        }

        Ok(renderer)
    }

    /// Substitute `vars` into the named template
    ///
    /// Fails if the template references a placeholder missing from `vars`.
    pub fn render(&self, name: &str, vars: &Vars<'_>) -> Result<String> {
        debug!("Rendering template '{}'", name);
        Ok(self.handlebars.render(name, vars)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;
    use tempfile::TempDir;

    #[test]
    fn test_render_grid() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut vars = Vars::new();
        vars.insert("rows", "<tr></tr>".to_string());
        assert_eq!(
            renderer.render("grid", &vars).unwrap(),
            "<table>\n<tr></tr>\n</table>"
        );
    }

    #[test]
    fn test_missing_placeholder_fails() {
        let renderer = TemplateRenderer::new().unwrap();
        let vars = Vars::new();
        assert!(matches!(
            renderer.render("grid", &vars),
            Err(CatalogError::Render(_))
        ));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut vars = Vars::new();
        vars.insert("rows", "<tr><td>&nbsp;\"x\"</td></tr>".to_string());
        assert!(renderer
            .render("grid", &vars)
            .unwrap()
            .contains("<tr><td>&nbsp;\"x\"</td></tr>"));
    }

    #[test]
    fn test_override_replaces_builtin() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("grid.hbs"), "GRID[{{rows}}]").unwrap();

        let renderer = TemplateRenderer::with_overrides(temp_dir.path()).unwrap();
        let mut vars = Vars::new();
        vars.insert("rows", "r".to_string());
        assert_eq!(renderer.render("grid", &vars).unwrap(), "GRID[r]");
    }
}
