use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one entry within a section. Assigned by the store, never
/// changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// A fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, `end_date` is ignored and the role reads as ongoing.
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub gpa: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: EntryId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub link: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub id: EntryId,
    pub name: String,
    pub organization: String,
    pub date: String,
    pub description: String,
}

/// The whole resume: personal info plus every repeatable section, each in
/// display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeDocument {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// An entry that lives in an id-addressed section.
pub trait Entry {
    type Patch;

    fn id(&self) -> &EntryId;
    fn set_id(&mut self, id: EntryId);
    fn apply(&mut self, patch: Self::Patch);
}

macro_rules! patch_field {
    ($target:expr, $patch:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

/// Partial update of [`PersonalInfo`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfo {
    pub fn apply(&mut self, patch: PersonalInfoPatch) {
        patch_field!(self, patch, name, title, email, phone, location, website, summary);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
}

impl Entry for ExperienceEntry {
    type Patch = ExperiencePatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: ExperiencePatch) {
        patch_field!(
            self, patch, job_title, company, location, start_date, end_date, current,
            description, achievements,
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

impl Entry for EducationEntry {
    type Patch = EducationPatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: EducationPatch) {
        patch_field!(
            self, patch, school, degree, field_of_study, location, start_date, end_date,
            current, gpa, description,
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillPatch {
    pub name: Option<String>,
}

impl Entry for SkillEntry {
    type Patch = SkillPatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: SkillPatch) {
        patch_field!(self, patch, name);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub technologies: Option<Vec<String>>,
}

impl Entry for ProjectEntry {
    type Patch = ProjectPatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: ProjectPatch) {
        patch_field!(self, patch, title, description, link, technologies);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl Entry for CertificationEntry {
    type Patch = CertificationPatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: CertificationPatch) {
        patch_field!(self, patch, name, organization, date, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_empty() {
        let doc = ResumeDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.personal_info.name, "");
        assert!(doc.experience.is_empty());
        assert!(doc.certifications.is_empty());
    }

    #[test]
    fn test_default_entries_have_blank_ids() {
        assert!(EntryId::default().is_blank());
        assert!(ExperienceEntry::default().id.is_blank());
        assert!(EducationEntry::default().id.is_blank());
        assert!(SkillEntry::default().id.is_blank());
        assert!(ProjectEntry::default().id.is_blank());
        assert!(CertificationEntry::default().id.is_blank());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let doc = ResumeDocument {
            experience: vec![ExperienceEntry {
                id: EntryId::from("e1"),
                job_title: "Engineer".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"jobTitle\":\"Engineer\""));
        assert!(json.contains("\"id\":\"e1\""));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"personalInfo": {"name": "Ada"}, "skills": [{"id": "s1", "name": "Go"}]}"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.personal_info.name, "Ada");
        assert_eq!(doc.personal_info.email, "");
        assert_eq!(doc.skills.len(), 1);
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert!(!a.is_blank());
    }

    #[test]
    fn test_experience_patch_merges_only_given_fields() {
        let mut entry = ExperienceEntry {
            id: EntryId::from("x"),
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            current: true,
            ..Default::default()
        };
        entry.apply(ExperiencePatch {
            company: Some("Acme Corp".to_string()),
            ..Default::default()
        });
        assert_eq!(entry.company, "Acme Corp");
        assert_eq!(entry.job_title, "Engineer");
        assert!(entry.current);
        assert_eq!(entry.id, EntryId::from("x"));
    }

    #[test]
    fn test_personal_info_patch_can_clear_a_field() {
        let mut info = PersonalInfo {
            website: "https://example.com".to_string(),
            ..Default::default()
        };
        info.apply(PersonalInfoPatch {
            website: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(info.website, "");
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: ProjectPatch = serde_json::from_str(r#"{"technologies": ["Rust"]}"#).unwrap();
        assert_eq!(patch.technologies, Some(vec!["Rust".to_string()]));
        assert_eq!(patch.title, None);
    }
}
