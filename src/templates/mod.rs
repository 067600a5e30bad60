//! Page templates
//!
//! The handlebars sources under `templates/` are compiled into the binary
//! and registered once at startup.

use axum::response::Html;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use tracing::error;

use crate::utils::errors::{AcademyError, Result};

const LAYOUT: &str = include_str!("../../templates/layout.hbs");

const PAGES: [(&str, &str); 5] = [
    ("login", include_str!("../../templates/login.hbs")),
    ("dashboard", include_str!("../../templates/dashboard.hbs")),
    ("students", include_str!("../../templates/students.hbs")),
    ("teachers", include_str!("../../templates/teachers.hbs")),
    ("reports", include_str!("../../templates/reports.hbs")),
];

handlebars_helper!(fixed: |amount: f64| format!("{:.2}", amount));

/// Registry of every page the application serves
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_helper("fixed", Box::new(fixed));

        registry
            .register_partial("layout", LAYOUT)
            .map_err(|e| AcademyError::Config(format!("Error registering layout: {e}")))?;

        for (name, source) in PAGES {
            registry
                .register_template_string(name, source)
                .map_err(|e| AcademyError::Config(format!("Error registering template {name:?}: {e}")))?;
        }

        Ok(Self { registry })
    }

    /// Render a page with the given data
    pub fn render<S: Serialize>(&self, name: &str, data: &S) -> Result<Html<String>> {
        let body = self.registry.render(name, data).map_err(|e| {
            error!(template = name, error = %e, "Error rendering template");
            AcademyError::Template(e)
        })?;

        Ok(Html(body))
    }

    pub fn has_page(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }
}
