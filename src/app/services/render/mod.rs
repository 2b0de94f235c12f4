//! HTML rendering of a resume into one of the visual templates.
//!
//! Each template is a static layout over the same document. The output is a
//! single `<article>` element; [`render_page`] wraps it into a standalone HTML
//! page with the template's stylesheet for previews and rasterization.

mod classic;
mod markup;
mod minimalist;
mod modern;

use crate::app::domain::{ResumeDocument, TemplateId};

pub use markup::{escape_html, render_markdown};

/// Element id of the rendered resume, the surface handed to export.
pub const SURFACE_ID: &str = "resume-preview";

/// Render `document` with `template` into an `<article>` element.
pub fn render_html(document: &ResumeDocument, template: TemplateId) -> String {
    let body = match template {
        TemplateId::Minimalist => minimalist::render(document),
        TemplateId::Classic => classic::render(document),
        TemplateId::Modern => modern::render(document),
    };
    format!(
        "<article id=\"{}\" class=\"resume resume--{}\">{}</article>",
        SURFACE_ID,
        template.key(),
        body
    )
}

/// Render by template identifier; unknown or empty identifiers use the
/// default template.
pub fn render_html_by_key(document: &ResumeDocument, key: &str) -> String {
    render_html(document, TemplateId::from_str_or_default(key))
}

/// A complete HTML page around the rendered resume. `extra_css` is appended
/// after the template stylesheet.
pub fn render_page(document: &ResumeDocument, template: TemplateId, extra_css: &str) -> String {
    let title = if document.personal_info.name.trim().is_empty() {
        "Resume".to_string()
    } else {
        format!("{} - Resume", escape_html(document.personal_info.name.trim()))
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        title,
        stylesheet(template),
        extra_css,
        render_html(document, template)
    )
}

/// Base stylesheet for a template.
pub fn stylesheet(template: TemplateId) -> &'static str {
    match template {
        TemplateId::Minimalist => minimalist::STYLESHEET,
        TemplateId::Classic => classic::STYLESHEET,
        TemplateId::Modern => modern::STYLESHEET,
    }
}
