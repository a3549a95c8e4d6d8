//! Artifact template registry
//!
//! A thin facade over Handlebars: every artifact template is registered by
//! name at construction and rendered against a `serde_json` context built
//! by the composers.

use handlebars::Handlebars;

use crate::scaffold::error::GenerateError;

pub mod files;

/// Compiled artifact templates, keyed by artifact kind.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile and register all built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if a built-in template fails to
    /// compile.
    pub fn new() -> Result<Self, GenerateError> {
        let mut handlebars = Handlebars::new();

        // Output is source code, not HTML.
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_template_string("model", files::MODEL)?;
        handlebars.register_template_string("controller", files::CONTROLLER)?;
        handlebars.register_template_string("migration", files::MIGRATION)?;
        handlebars.register_template_string("test", files::TEST)?;
        handlebars.register_template_string("controller_test", files::CONTROLLER_TEST)?;

        Ok(Self { handlebars })
    }

    /// Render the named template against `context`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Render`] when the template is missing or the
    /// context does not satisfy it.
    pub fn render(
        &self,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String, GenerateError> {
        Ok(self.handlebars.render(name, context)?)
    }
}
