//! HTML pages rendered with Handlebars.
//!
//! Templates are compiled into the binary and registered once at startup.

use handlebars::Handlebars;
use hauck_core::{Report, ABOUT, MAX_SAMPLE_SIZE};
use serde::Serialize;

use crate::error::WebError;
use crate::form::CalculatorForm;

const LAYOUT_HEAD: &str = include_str!("../templates/head.hbs");
const INDEX: &str = include_str!("../templates/index.hbs");
const ABOUT_PAGE: &str = include_str!("../templates/about.hbs");

/// Context for the calculator page.
#[derive(Debug, Serialize)]
pub struct FormPage<'a> {
    pub form: &'a CalculatorForm,
    pub one_tailed: bool,
    pub greater_than: bool,
    pub max_count: u32,
    pub report: Option<&'a Report>,
    pub error: Option<String>,
}

impl<'a> FormPage<'a> {
    pub fn new(form: &'a CalculatorForm) -> Self {
        Self {
            form,
            one_tailed: form.is_one_tailed(),
            greater_than: form.direction.as_deref().map(str::trim) == Some("greater-than"),
            max_count: MAX_SAMPLE_SIZE,
            report: None,
            error: None,
        }
    }

    pub fn with_report(mut self, report: &'a Report) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}

/// Compiled template registry.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> hauck_common::Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_partial("head", LAYOUT_HEAD)
            .map_err(|e| hauck_common::Error::Render(e.to_string()))?;
        registry
            .register_template_string("index", INDEX)
            .map_err(|e| hauck_common::Error::Render(e.to_string()))?;
        registry
            .register_template_string("about", ABOUT_PAGE)
            .map_err(|e| hauck_common::Error::Render(e.to_string()))?;

        Ok(Self { registry })
    }

    pub fn render_form(&self, page: &FormPage<'_>) -> Result<String, WebError> {
        Ok(self.registry.render("index", page)?)
    }

    pub fn render_about(&self) -> Result<String, WebError> {
        Ok(self.registry.render("about", &ABOUT)?)
    }
}
