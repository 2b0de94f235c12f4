//! The resume store: single owner of the resume document and the template
//! selection, with write-through persistence.
//!
//! Every accepted mutation is written to storage before the call returns. A
//! mutation is applied to a copy first and swapped in only after the write
//! succeeds, so the in-memory document never runs ahead of storage.

use tracing::{debug, info, warn};

use crate::app::domain::{
    CertificationEntry, CertificationPatch, EducationEntry, EducationPatch, Entry, EntryId,
    ExperienceEntry, ExperiencePatch, PersonalInfoPatch, ProjectEntry, ProjectPatch,
    ResumeDocument, SkillEntry, SkillPatch, TemplateId,
};
use crate::app::infrastructure::error::StoreError;
use crate::app::infrastructure::storage::KeyValueStorage;
use crate::app::services::legacy::{assign_unique_ids, decode_document};

/// Storage key of the resume document record.
pub const RESUME_KEY: &str = "resumeData";
/// Storage key of the template selection record.
pub const TEMPLATE_KEY: &str = "selectedTemplate";

/// Result of an update or remove addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// No entry had the id; nothing changed and nothing was written.
    NotFound,
}

impl Outcome {
    pub fn applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// How [`ResumeStore::load`] obtained a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Read back as stored.
    Restored,
    /// Read back after coercing an older shape; the canonical form was written.
    Migrated,
    /// Nothing was stored; the default was written.
    Initialized,
    /// The stored record was unreadable; the default replaced it.
    Recovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub document: LoadSource,
    pub template: LoadSource,
}

pub struct ResumeStore<S: KeyValueStorage> {
    storage: S,
    document: ResumeDocument,
    template: TemplateId,
}

macro_rules! section_ops {
    (
        $section:ident, $entry:ty, $patch:ty,
        add = $add:ident, update = $update:ident, remove = $remove:ident,
        get = $get:ident
    ) => {
        /// Append an entry and return its id. The caller's id is kept when it
        /// is non-blank and not already used in the section.
        pub fn $add(&mut self, entry: $entry) -> Result<EntryId, StoreError> {
            let id = self.commit(|doc| push_entry(&mut doc.$section, entry))?;
            debug!(section = stringify!($section), %id, "entry added");
            Ok(id)
        }

        /// Merge `patch` into the entry with `id`. Unknown ids are a no-op.
        pub fn $update(&mut self, id: &EntryId, patch: $patch) -> Result<Outcome, StoreError> {
            if !self.document.$section.iter().any(|e| e.id() == id) {
                debug!(section = stringify!($section), %id, "update skipped, no such entry");
                return Ok(Outcome::NotFound);
            }
            self.commit(|doc| {
                if let Some(entry) = doc.$section.iter_mut().find(|e| e.id() == id) {
                    entry.apply(patch);
                }
            })?;
            Ok(Outcome::Applied)
        }

        /// Remove the entry with `id`. Unknown ids are a no-op.
        pub fn $remove(&mut self, id: &EntryId) -> Result<Outcome, StoreError> {
            if !self.document.$section.iter().any(|e| e.id() == id) {
                debug!(section = stringify!($section), %id, "remove skipped, no such entry");
                return Ok(Outcome::NotFound);
            }
            self.commit(|doc| doc.$section.retain(|e| e.id() != id))?;
            debug!(section = stringify!($section), %id, "entry removed");
            Ok(Outcome::Applied)
        }

        pub fn $get(&self, id: &EntryId) -> Option<&$entry> {
            self.document.$section.iter().find(|e| e.id() == id)
        }
    };
}

impl<S: KeyValueStorage> ResumeStore<S> {
    /// Create a store over `storage` and load whatever it holds.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            document: ResumeDocument::default(),
            template: TemplateId::default(),
        };
        store.load();
        store
    }

    /// Read both records from storage. Missing or unreadable records fall back
    /// to their defaults, which are then written back. Never fails.
    pub fn load(&mut self) -> LoadReport {
        let (document, document_source) = self.read_document();
        let (template, template_source) = self.read_template();
        self.document = document;
        self.template = template;

        if document_source != LoadSource::Restored {
            if let Err(e) = write_document(&mut self.storage, &self.document) {
                warn!("Failed to write resume document after load: {}", e);
            }
        }
        if template_source != LoadSource::Restored {
            if let Err(e) = write_template(&mut self.storage, self.template) {
                warn!("Failed to write template selection after load: {}", e);
            }
        }

        info!(
            document = ?document_source,
            template = ?template_source,
            selected = %self.template,
            "resume store loaded"
        );
        LoadReport {
            document: document_source,
            template: template_source,
        }
    }

    /// Rewrite both records from the in-memory state. Memory is never changed,
    /// so a partial failure only leaves storage closer to it.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        write_document(&mut self.storage, &self.document)?;
        write_template(&mut self.storage, self.template)?;
        Ok(())
    }

    pub fn resume_data(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn selected_template(&self) -> TemplateId {
        self.template
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replace the whole document. Entry ids are made unique first.
    pub fn save_document(&mut self, mut document: ResumeDocument) -> Result<(), StoreError> {
        assign_unique_ids(&mut document);
        self.commit(move |doc| *doc = document)
    }

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) -> Result<(), StoreError> {
        self.commit(|doc| doc.personal_info.apply(patch))
    }

    section_ops!(
        experience, ExperienceEntry, ExperiencePatch,
        add = add_experience, update = update_experience, remove = remove_experience,
        get = experience
    );

    section_ops!(
        education, EducationEntry, EducationPatch,
        add = add_education, update = update_education, remove = remove_education,
        get = education
    );

    section_ops!(
        skills, SkillEntry, SkillPatch,
        add = add_skill, update = update_skill, remove = remove_skill,
        get = skill
    );

    section_ops!(
        projects, ProjectEntry, ProjectPatch,
        add = add_project, update = update_project, remove = remove_project,
        get = project
    );

    section_ops!(
        certifications, CertificationEntry, CertificationPatch,
        add = add_certification, update = update_certification, remove = remove_certification,
        get = certification
    );

    /// Select a template by its identifier. Unknown identifiers are rejected
    /// and leave the selection unchanged.
    pub fn set_template(&mut self, id: &str) -> Result<TemplateId, StoreError> {
        let template: TemplateId = id
            .parse()
            .map_err(|_| StoreError::InvalidTemplate(id.to_string()))?;
        self.select_template(template)?;
        Ok(template)
    }

    pub fn select_template(&mut self, template: TemplateId) -> Result<(), StoreError> {
        write_template(&mut self.storage, template)?;
        self.template = template;
        info!(template = %template, "template selected");
        Ok(())
    }

    /// Restore the default document and template and overwrite both records.
    /// Irreversible; callers confirm with the user first.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let document = ResumeDocument::default();
        let template = TemplateId::default();
        write_document(&mut self.storage, &document)?;
        if let Err(e) = write_template(&mut self.storage, template) {
            // Put the document record back so storage still matches memory
            if let Err(restore) = write_document(&mut self.storage, &self.document) {
                warn!("Failed to restore resume document after failed reset: {}", restore);
            }
            return Err(e);
        }
        self.document = document;
        self.template = template;
        info!("resume store reset to defaults");
        Ok(())
    }

    /// Apply `change` to a copy of the document, write it, then keep it.
    fn commit<R>(&mut self, change: impl FnOnce(&mut ResumeDocument) -> R) -> Result<R, StoreError> {
        let mut next = self.document.clone();
        let out = change(&mut next);
        write_document(&mut self.storage, &next)?;
        self.document = next;
        Ok(out)
    }

    fn read_document(&self) -> (ResumeDocument, LoadSource) {
        let raw = match self.storage.get(RESUME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (ResumeDocument::default(), LoadSource::Initialized),
            Err(e) => {
                warn!("Failed to read resume document: {}. Using defaults.", e);
                return (ResumeDocument::default(), LoadSource::Recovered);
            }
        };

        match decode_document(&raw) {
            Ok(decoded) if decoded.migrated => {
                info!("resume document migrated to the current layout");
                (decoded.document, LoadSource::Migrated)
            }
            Ok(decoded) => (decoded.document, LoadSource::Restored),
            Err(e) => {
                warn!("Failed to parse resume document: {}. Using defaults.", e);
                (ResumeDocument::default(), LoadSource::Recovered)
            }
        }
    }

    fn read_template(&self) -> (TemplateId, LoadSource) {
        let raw = match self.storage.get(TEMPLATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (TemplateId::default(), LoadSource::Initialized),
            Err(e) => {
                warn!("Failed to read template selection: {}. Using default.", e);
                return (TemplateId::default(), LoadSource::Recovered);
            }
        };

        if let Ok(template) = serde_json::from_str::<TemplateId>(&raw) {
            return (template, LoadSource::Restored);
        }
        // Older records hold the bare identifier without JSON quoting
        match raw.trim().parse::<TemplateId>() {
            Ok(template) => (template, LoadSource::Migrated),
            Err(e) => {
                warn!("Failed to parse template selection: {}. Using default.", e);
                (TemplateId::default(), LoadSource::Recovered)
            }
        }
    }
}

fn write_document<S: KeyValueStorage>(
    storage: &mut S,
    document: &ResumeDocument,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(document)?;
    storage.set(RESUME_KEY, &json)?;
    Ok(())
}

fn write_template<S: KeyValueStorage>(storage: &mut S, template: TemplateId) -> Result<(), StoreError> {
    let json = serde_json::to_string(&template)?;
    storage.set(TEMPLATE_KEY, &json)?;
    Ok(())
}

/// Append `entry`, replacing a blank or already-used id with a fresh one.
fn push_entry<E: Entry>(entries: &mut Vec<E>, mut entry: E) -> EntryId {
    let taken = |id: &EntryId| entries.iter().any(|e| e.id() == id);
    if entry.id().is_blank() || taken(entry.id()) {
        let mut fresh = EntryId::generate();
        while taken(&fresh) {
            fresh = EntryId::generate();
        }
        entry.set_id(fresh);
    }
    let id = entry.id().clone();
    entries.push(entry);
    id
}
