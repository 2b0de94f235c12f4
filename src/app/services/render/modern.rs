//! Large header, then a wide column for experience and projects beside a
//! narrow one for education, skills and certifications.

use super::markup::{
    bullet_list, date_range, escape_html, link, markdown_block, section, text_element,
};
use crate::app::domain::ResumeDocument;

pub(super) const STYLESHEET: &str = "\
.resume--modern { padding: 2.5rem; background: #fff; font-family: 'Helvetica Neue', Arial, sans-serif; }
.resume--modern header h1 { font-size: 3rem; margin: 0; }
.resume--modern .contact-row { color: #4b5563; }
.resume--modern .columns { display: grid; grid-template-columns: 2fr 1fr; gap: 2.5rem; }
.resume--modern h2 { display: inline-block; border-bottom: 2px solid #ec4899; padding-bottom: .75rem; }
.resume--modern .tag { display: inline-block; background: #fce7f3; color: #9d174d; border-radius: 9999px; padding: .25rem .75rem; margin: .25rem; }";

pub(super) fn render(doc: &ResumeDocument) -> String {
    let mut out = header(doc);
    out.push_str(&section(
        "summary",
        "About Me",
        &markdown_block("summary-text", &doc.personal_info.summary),
    ));
    out.push_str("<div class=\"columns\"><div class=\"primary\">");
    out.push_str(&experience(doc));
    out.push_str(&projects(doc));
    out.push_str("</div><div class=\"secondary\">");
    out.push_str(&education(doc));
    out.push_str(&skills(doc));
    out.push_str(&certifications(doc));
    out.push_str("</div></div>");
    out
}

fn header(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let contacts: Vec<String> = [&info.email, &info.phone, &info.location, &info.website]
        .into_iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(escape_html)
        .collect();
    format!(
        "<header><h1>{}</h1>{}<p class=\"contact-row\">{}</p></header>",
        escape_html(info.name.trim()),
        text_element("p", "title", &info.title),
        contacts.join(" | ")
    )
}

fn tags(items: &[String]) -> String {
    items
        .iter()
        .filter(|t| !t.trim().is_empty())
        .map(|t| format!("<span class=\"tag\">{}</span>", escape_html(t.trim())))
        .collect()
}

fn experience(doc: &ResumeDocument) -> String {
    let items: String = doc
        .experience
        .iter()
        .map(|exp| {
            let at = [exp.company.trim(), exp.location.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "<div class=\"role\">{}{}{}{}{}</div>",
                text_element("h3", "job-title", &exp.job_title),
                text_element("p", "company", &at),
                text_element("p", "dates", &date_range(&exp.start_date, &exp.end_date, exp.current, " - ")),
                markdown_block("description", &exp.description),
                bullet_list("achievements", &exp.achievements),
            )
        })
        .collect();
    section("experience", "Work Experience", &items)
}

fn projects(doc: &ResumeDocument) -> String {
    let items: String = doc
        .projects
        .iter()
        .map(|project| {
            let url = link(&project.link);
            let url = if url.is_empty() {
                url
            } else {
                format!("<p class=\"link\">Project URL: {}</p>", url)
            };
            format!(
                "<div class=\"project\">{}{}{}<div class=\"tags\">{}</div></div>",
                text_element("h3", "project-title", &project.title),
                markdown_block("description", &project.description),
                url,
                tags(&project.technologies)
            )
        })
        .collect();
    section("projects", "Projects", &items)
}

fn education(doc: &ResumeDocument) -> String {
    let items: String = doc
        .education
        .iter()
        .map(|edu| {
            format!(
                "<div class=\"school\">{}{}{}{}</div>",
                text_element("h3", "degree", &edu.degree),
                text_element("p", "field", &edu.field_of_study),
                text_element("p", "school-name", &edu.school),
                text_element("p", "dates", &date_range(&edu.start_date, &edu.end_date, edu.current, " - ")),
            )
        })
        .collect();
    section("education", "Education", &items)
}

fn skills(doc: &ResumeDocument) -> String {
    let names: Vec<String> = doc.skills.iter().map(|s| s.name.clone()).collect();
    section("skills", "Skills", &tags(&names))
}

fn certifications(doc: &ResumeDocument) -> String {
    let items: String = doc
        .certifications
        .iter()
        .map(|cert| {
            format!(
                "<div class=\"certification\">{}{}{}</div>",
                text_element("h3", "cert-name", &cert.name),
                text_element("p", "organization", &cert.organization),
                text_element("p", "date", &cert.date),
            )
        })
        .collect();
    section("certifications", "Certifications", &items)
}
