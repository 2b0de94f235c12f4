//! Two columns: a sidebar with identity, contact, skills and certifications,
//! and a main column with summary, education, experience and projects.

use super::markup::{
    bullet_list, date_range, escape_html, link, markdown_block, section, text_element,
};
use crate::app::domain::ResumeDocument;

pub(super) const STYLESHEET: &str = "\
.resume--minimalist { display: flex; min-height: 297mm; background: #f3f4f6; font-family: sans-serif; }
.resume--minimalist aside { width: 16rem; background: #fff; padding: 1.5rem; }
.resume--minimalist main { flex: 1; padding: 2rem; }
.resume--minimalist .identity { text-align: center; margin-bottom: 2rem; }
.resume--minimalist h2 { color: #1f2937; border-bottom: 1px solid #d1d5db; padding-bottom: .75rem; }
.resume--minimalist .summary h2 { color: #1d4ed8; border-bottom: 2px solid #1d4ed8; }
.resume--minimalist .tech { display: inline-block; background: #e5e7eb; padding: .25rem .5rem; margin: .25rem; }";

pub(super) fn render(doc: &ResumeDocument) -> String {
    let mut out = String::new();
    out.push_str("<aside>");
    out.push_str(&identity(doc));
    out.push_str(&contact(doc));
    out.push_str(&skills(doc));
    out.push_str(&certifications(doc));
    out.push_str("</aside><main>");
    out.push_str(&section(
        "summary",
        "Professional Summary",
        &markdown_block("summary-text", &doc.personal_info.summary),
    ));
    out.push_str(&education(doc));
    out.push_str(&experience(doc));
    out.push_str(&projects(doc));
    out.push_str("</main>");
    out
}

fn identity(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let name = non_blank_or(&info.name, "Your Name");
    let title = non_blank_or(&info.title, "Job Title");
    format!(
        "<div class=\"identity\"><h1>{}</h1><p class=\"title\">{}</p></div>",
        escape_html(name),
        escape_html(title)
    )
}

fn non_blank_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value.trim()
    }
}

fn contact(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let items: Vec<String> = [&info.email, &info.phone, &info.location, &info.website]
        .into_iter()
        .cloned()
        .collect();
    let list = bullet_list("contact-list", &items);
    // The heading stays even with no details, as a prompt in the live preview
    format!("<section class=\"contact\"><h2>Contact</h2>{}</section>", list)
}

fn skills(doc: &ResumeDocument) -> String {
    let names: Vec<String> = doc.skills.iter().map(|s| s.name.clone()).collect();
    section("skills", "Skills", &bullet_list("skill-list", &names))
}

fn certifications(doc: &ResumeDocument) -> String {
    let items: String = doc
        .certifications
        .iter()
        .map(|cert| {
            format!(
                "<li>{}{}{}</li>",
                text_element("p", "name", &cert.name),
                text_element("p", "organization", &cert.organization),
                text_element("p", "date", &cert.date),
            )
        })
        .collect();
    if items.is_empty() {
        return String::new();
    }
    section("certifications", "Certifications", &format!("<ul>{}</ul>", items))
}

fn education(doc: &ResumeDocument) -> String {
    let items: String = doc
        .education
        .iter()
        .map(|edu| {
            let degree = if edu.field_of_study.trim().is_empty() {
                edu.degree.clone()
            } else {
                format!("{} in {}", edu.degree.trim(), edu.field_of_study.trim())
            };
            format!(
                "<li>{}{}{}{}</li>",
                text_element("p", "degree", &degree),
                text_element("p", "school", &edu.school),
                text_element("p", "location", &edu.location),
                text_element("p", "dates", &date_range(&edu.start_date, &edu.end_date, edu.current, " - ")),
            )
        })
        .collect();
    if items.is_empty() {
        return String::new();
    }
    section("education", "Education", &format!("<ul>{}</ul>", items))
}

fn experience(doc: &ResumeDocument) -> String {
    let items: String = doc
        .experience
        .iter()
        .map(|exp| {
            let dates = date_range(&exp.start_date, &exp.end_date, exp.current, " - ");
            let dates = if dates.is_empty() {
                String::new()
            } else {
                format!(" <span class=\"dates\">({})</span>", escape_html(&dates))
            };
            let employer: Vec<&str> = [exp.company.trim(), exp.location.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
            format!(
                "<div class=\"role\"><h3>{}{}</h3>{}{}{}</div>",
                escape_html(exp.job_title.trim()),
                dates,
                text_element("p", "employer", &employer.join(" \u{2014} ")),
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
        .enumerate()
        .map(|(idx, project)| {
            let title = if project.title.trim().is_empty() {
                format!("Project {}", idx + 1)
            } else {
                project.title.trim().to_string()
            };
            let url = link(&project.link);
            let url = if url.is_empty() {
                url
            } else {
                format!("<p class=\"link\">Project URL: {}</p>", url)
            };
            let tech: String = project
                .technologies
                .iter()
                .filter(|t| !t.trim().is_empty())
                .map(|t| format!("<span class=\"tech\">{}</span>", escape_html(t.trim())))
                .collect();
            let tech = if tech.is_empty() {
                tech
            } else {
                format!("<div class=\"technologies\">{}</div>", tech)
            };
            format!(
                "<div class=\"project\"><h3>{}</h3>{}{}{}</div>",
                escape_html(&title),
                markdown_block("description", &project.description),
                url,
                tech
            )
        })
        .collect();
    section("projects", "Projects", &items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{EducationEntry, EntryId, ProjectEntry};

    #[test]
    fn test_placeholders_for_blank_identity() {
        let html = render(&ResumeDocument::default());
        assert!(html.contains("<h1>Your Name</h1>"));
        assert!(html.contains("Job Title"));
    }

    #[test]
    fn test_untitled_projects_are_numbered() {
        let mut doc = ResumeDocument::default();
        for title in ["", "Compiler", ""] {
            doc.projects.push(ProjectEntry {
                id: EntryId::generate(),
                title: title.to_string(),
                technologies: vec!["Rust".to_string()],
                ..Default::default()
            });
        }
        let html = render(&doc);
        assert!(html.contains("<h3>Project 1</h3>"));
        assert!(html.contains("<h3>Compiler</h3>"));
        assert!(html.contains("<h3>Project 3</h3>"));
        assert!(html.contains("<span class=\"tech\">Rust</span>"));
    }

    #[test]
    fn test_education_joins_degree_and_field() {
        let mut doc = ResumeDocument::default();
        doc.education.push(EducationEntry {
            id: EntryId::from("ed"),
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Physics".to_string(),
            start_date: "2015".to_string(),
            end_date: "2019".to_string(),
            ..Default::default()
        });
        let html = render(&doc);
        assert!(html.contains("BSc in Physics"));
        assert!(html.contains("2015 - 2019"));
    }
}
