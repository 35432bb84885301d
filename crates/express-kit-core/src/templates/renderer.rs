//! Handlebars-based renderer for the templates that carry variables.
//!
//! Strict mode is always on: a `{{variable}}` missing from the data context is
//! an error, not an empty string. Rendered files land in users' projects, so a
//! silently dropped variable would only surface much later as a broken file.

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{Result, ScaffoldError};

/// Template renderer with Handlebars strict mode enabled.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_variables() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("hello {{name}}", &serde_json::json!({ "name": "world" }))
            .unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("hello {{name}}", &serde_json::json!({}));
        assert!(result.is_err());
    }
}
