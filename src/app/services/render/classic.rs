//! Single column with a centered header and underlined section headings.

use super::markup::{
    bullet_list, date_range, escape_html, link, markdown_block, section, text_element,
};
use crate::app::domain::ResumeDocument;

pub(super) const STYLESHEET: &str = "\
.resume--classic { max-width: 210mm; margin: 0 auto; padding: 2rem; background: #fff; font-family: Georgia, serif; }
.resume--classic header { text-align: center; border-bottom: 1px solid #d1d5db; padding-bottom: 1.5rem; margin-bottom: 1.5rem; }
.resume--classic .contact-row span { margin: 0 .75rem; }
.resume--classic h2 { color: #1d4ed8; border-bottom: 2px solid #1d4ed8; padding-bottom: .75rem; }
.resume--classic .entry-head { display: flex; justify-content: space-between; }
.resume--classic .skill { display: inline-block; border: 1px solid #d1d5db; padding: .25rem .75rem; margin: .25rem; }";

const DASH: &str = " \u{2013} ";

pub(super) fn render(doc: &ResumeDocument) -> String {
    let mut out = header(doc);
    out.push_str(&section(
        "summary",
        "Professional Summary",
        &markdown_block("summary-text", &doc.personal_info.summary),
    ));
    out.push_str(&experience(doc));
    out.push_str(&education(doc));
    out.push_str(&skills(doc));
    out.push_str(&projects(doc));
    out.push_str(&certifications(doc));
    out
}

fn header(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let contacts: String = [
        ("phone", &info.phone),
        ("email", &info.email),
        ("location", &info.location),
        ("website", &info.website),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(class, value)| format!("<span class=\"{}\">{}</span>", class, escape_html(value.trim())))
    .collect();

    format!(
        "<header><h1>{}</h1>{}<div class=\"contact-row\">{}</div></header>",
        escape_html(info.name.trim()),
        text_element("p", "title", &info.title),
        contacts
    )
}

fn entry_head(left: &str, right: &str) -> String {
    format!(
        "<div class=\"entry-head\"><div>{}</div>{}</div>",
        left,
        text_element("span", "dates", right)
    )
}

fn experience(doc: &ResumeDocument) -> String {
    let items: String = doc
        .experience
        .iter()
        .map(|exp| {
            let left = format!(
                "{}{}",
                text_element("h3", "job-title", &exp.job_title),
                text_element("p", "company", &exp.company)
            );
            format!(
                "<div class=\"role\">{}{}{}{}</div>",
                entry_head(&left, &date_range(&exp.start_date, &exp.end_date, exp.current, DASH)),
                text_element("p", "location", &exp.location),
                markdown_block("description", &exp.description),
                bullet_list("achievements", &exp.achievements),
            )
        })
        .collect();
    section("experience", "Work Experience", &items)
}

fn education(doc: &ResumeDocument) -> String {
    let items: String = doc
        .education
        .iter()
        .map(|edu| {
            let left = format!(
                "{}{}{}",
                text_element("h3", "degree", &edu.degree),
                text_element("p", "field", &edu.field_of_study),
                text_element("p", "school", &edu.school)
            );
            let gpa = if edu.gpa.trim().is_empty() {
                String::new()
            } else {
                format!("<p class=\"gpa\">GPA: {}</p>", escape_html(edu.gpa.trim()))
            };
            format!(
                "<div class=\"school\">{}{}{}</div>",
                entry_head(&left, &date_range(&edu.start_date, &edu.end_date, edu.current, DASH)),
                gpa,
                markdown_block("description", &edu.description),
            )
        })
        .collect();
    section("education", "Education", &items)
}

fn skills(doc: &ResumeDocument) -> String {
    let items: String = doc
        .skills
        .iter()
        .filter(|s| !s.name.trim().is_empty())
        .map(|s| format!("<span class=\"skill\">{}</span>", escape_html(s.name.trim())))
        .collect();
    if items.is_empty() {
        return String::new();
    }
    section("skills", "Skills", &format!("<div class=\"skill-list\">{}</div>", items))
}

fn projects(doc: &ResumeDocument) -> String {
    let items: String = doc
        .projects
        .iter()
        .map(|project| {
            let tech = if project.technologies.is_empty() {
                String::new()
            } else {
                text_element("p", "technologies", &project.technologies.join(", "))
            };
            format!(
                "<div class=\"project\">{}{}{}{}</div>",
                text_element("h3", "project-title", &project.title),
                markdown_block("description", &project.description),
                link(&project.link),
                tech
            )
        })
        .collect();
    section("projects", "Projects", &items)
}

fn certifications(doc: &ResumeDocument) -> String {
    let items: String = doc
        .certifications
        .iter()
        .map(|cert| {
            let left = format!(
                "{}{}",
                text_element("h3", "cert-name", &cert.name),
                text_element("p", "organization", &cert.organization)
            );
            format!(
                "<div class=\"certification\">{}{}</div>",
                entry_head(&left, &cert.date),
                markdown_block("description", &cert.description)
            )
        })
        .collect();
    section("certifications", "Certifications", &items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{CertificationEntry, EducationEntry, EntryId};

    #[test]
    fn test_header_lists_only_present_contacts() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.name = "Grace Hopper".to_string();
        doc.personal_info.email = "grace@navy.mil".to_string();
        let html = render(&doc);
        assert!(html.contains("<h1>Grace Hopper</h1>"));
        assert!(html.contains("<span class=\"email\">grace@navy.mil</span>"));
        assert!(!html.contains("class=\"phone\""));
    }

    #[test]
    fn test_education_shows_gpa_and_en_dash_range() {
        let mut doc = ResumeDocument::default();
        doc.education.push(EducationEntry {
            id: EntryId::from("ed"),
            degree: "MSc".to_string(),
            school: "Yale".to_string(),
            gpa: "3.8".to_string(),
            start_date: "2001".to_string(),
            end_date: "2003".to_string(),
            ..Default::default()
        });
        let html = render(&doc);
        assert!(html.contains("GPA: 3.8"));
        assert!(html.contains("2001 \u{2013} 2003"));
    }

    #[test]
    fn test_certifications_section() {
        let mut doc = ResumeDocument::default();
        doc.certifications.push(CertificationEntry {
            id: EntryId::from("c"),
            name: "CKA".to_string(),
            organization: "CNCF".to_string(),
            date: "2023".to_string(),
            ..Default::default()
        });
        let html = render(&doc);
        assert!(html.contains("<h2>Certifications</h2>"));
        assert!(html.contains("CNCF"));
        assert!(html.contains("<span class=\"dates\">2023</span>"));
    }
}
