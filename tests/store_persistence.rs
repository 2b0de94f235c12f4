use craftfolio::app::domain::{
    EducationEntry, EntryId, ExperienceEntry, ExperiencePatch, PersonalInfoPatch, ProjectEntry,
    SkillEntry, TemplateId,
};
use craftfolio::app::infrastructure::storage::{FileStorage, KeyValueStorage};
use craftfolio::app::services::store::{LoadSource, RESUME_KEY, ResumeStore, TEMPLATE_KEY};
use tempfile::TempDir;

fn open(dir: &TempDir) -> ResumeStore<FileStorage> {
    ResumeStore::open(FileStorage::new(dir.path()))
}

#[test]
fn test_fresh_directory_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);

    assert!(store.resume_data().is_empty());
    assert_eq!(store.selected_template(), TemplateId::Minimalist);
    assert!(dir.path().join("resumeData.json").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("selectedTemplate.json")).unwrap(),
        "\"minimalist\""
    );
}

#[test]
fn test_document_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    store
        .update_personal_info(PersonalInfoPatch {
            name: Some("Zoë Ångström".to_string()),
            summary: Some("Builds **reliable** systems\nacross 日本 and Québec".to_string()),
            ..Default::default()
        })
        .unwrap();
    let exp_id = store
        .add_experience(ExperienceEntry {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            current: true,
            achievements: vec!["Shipped v2".to_string(), String::new()],
            ..Default::default()
        })
        .unwrap();
    store
        .add_education(EducationEntry {
            school: "ETH".to_string(),
            ..Default::default()
        })
        .unwrap();
    store.add_skill(SkillEntry { name: "Rust".to_string(), ..Default::default() }).unwrap();
    store
        .add_project(ProjectEntry {
            title: String::new(),
            technologies: vec!["Wasm".to_string()],
            ..Default::default()
        })
        .unwrap();
    let expected = store.resume_data().clone();
    drop(store);

    let reopened = open(&dir);
    assert_eq!(reopened.resume_data(), &expected);
    assert_eq!(reopened.experience(&exp_id).map(|e| e.current), Some(true));
}

#[test]
fn test_every_mutation_is_written_through() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    let id = store.add_experience(ExperienceEntry::default()).unwrap();
    store
        .update_experience(
            &id,
            ExperiencePatch {
                company: Some("Initech".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let raw = store.storage().get(RESUME_KEY).unwrap().unwrap();
    let on_disk: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk["experience"][0]["company"], "Initech");
    assert_eq!(on_disk["experience"][0]["id"], id.as_str());
    assert_eq!(on_disk, serde_json::to_value(store.resume_data()).unwrap());
}

#[test]
fn test_template_selection_persists() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.set_template("modern").unwrap();
    assert!(store.set_template("brutalist").is_err());
    drop(store);

    let reopened = open(&dir);
    assert_eq!(reopened.selected_template(), TemplateId::Modern);
}

#[test]
fn test_reset_then_reopen_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.add_skill(SkillEntry { name: "Go".to_string(), ..Default::default() }).unwrap();
    store.set_template("classic").unwrap();
    store.reset().unwrap();
    drop(store);

    let mut reopened = open(&dir);
    assert!(reopened.resume_data().is_empty());
    assert_eq!(reopened.selected_template(), TemplateId::Minimalist);
    let report = reopened.load();
    assert_eq!(report.document, LoadSource::Restored);
    assert_eq!(report.template, LoadSource::Restored);
}

#[test]
fn test_legacy_records_are_migrated_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage
        .set(
            RESUME_KEY,
            r#"{"personalInfo":{"name":"Old"},"skills":["Rust","SQL"],"education":[{"school":"MIT","startDate":2010,"endDate":2014,"current":"false"}]}"#,
        )
        .unwrap();
    storage.set(TEMPLATE_KEY, "classic").unwrap();

    let mut store = ResumeStore::open(storage);
    assert_eq!(store.selected_template(), TemplateId::Classic);
    let names: Vec<&str> = store.resume_data().skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Rust", "SQL"]);
    assert!(store.resume_data().skills.iter().all(|s| !s.id.is_blank()));
    let edu = &store.resume_data().education[0];
    assert_eq!((edu.start_date.as_str(), edu.end_date.as_str()), ("2010", "2014"));
    assert!(!edu.current);

    let report = store.load();
    assert_eq!(report.document, LoadSource::Restored);
    assert_eq!(report.template, LoadSource::Restored);
}

#[test]
fn test_corrupt_record_recovers_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("resumeData.json"), "{not json").unwrap();

    let mut store = ResumeStore::open(FileStorage::new(dir.path()));
    assert!(store.resume_data().is_empty());
    assert_eq!(store.load().document, LoadSource::Restored);
}

#[test]
fn test_remove_unknown_id_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.add_skill(SkillEntry { name: "C".to_string(), ..Default::default() }).unwrap();
    let before = store.storage().get(RESUME_KEY).unwrap();

    let outcome = store.remove_skill(&EntryId::from("missing")).unwrap();
    assert!(!outcome.applied());
    assert_eq!(store.storage().get(RESUME_KEY).unwrap(), before);
}
