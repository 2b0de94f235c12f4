//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The resume document and its section entries
//! - Partial-update patches for each entry kind
//! - Template identifiers
//! - Application configuration

pub mod config;
pub mod resume;
pub mod template;

pub use config::AppConfig;
pub use resume::{
    CertificationEntry, CertificationPatch, EducationEntry, EducationPatch, Entry, EntryId,
    ExperienceEntry, ExperiencePatch, PersonalInfo, PersonalInfoPatch, ProjectEntry,
    ProjectPatch, ResumeDocument, SkillEntry, SkillPatch,
};
pub use template::{TemplateId, UnknownTemplate};
