//! Decoding of persisted resume records.
//!
//! Older records were written by form code that was loose about shapes:
//! skills stored as bare strings, projects with no ids, numeric ids and dates,
//! technologies as `{id, name}` objects, `null` fields, and an early
//! `contactInfo` layout. Everything is coerced into the canonical
//! [`ResumeDocument`] here, so the rest of the crate only sees one shape.

use std::collections::HashSet;

use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::app::domain::{Entry, EntryId, ResumeDocument};

/// A decoded record and whether decoding had to rewrite anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub document: ResumeDocument,
    /// True when the stored JSON differs from the canonical encoding, so the
    /// caller should write the document back.
    pub migrated: bool,
}

const SECTIONS: [&str; 5] = ["experience", "education", "skills", "projects", "certifications"];

/// Decode a persisted resume record. Fails only when the record is not a JSON
/// object or a field cannot be coerced into the canonical shape.
pub fn decode_document(raw: &str) -> Result<Decoded, serde_json::Error> {
    let original: Value = serde_json::from_str(raw)?;
    if !original.is_object() {
        return Err(serde_json::Error::custom("resume record is not a JSON object"));
    }

    let mut value = original.clone();
    if let Value::Object(root) = &mut value {
        migrate_contact_info(root);
        normalize_personal_info(root);
        for section in SECTIONS {
            normalize_section(root, section);
        }
    }

    let mut document: ResumeDocument = serde_json::from_value(value)?;
    assign_unique_ids(&mut document);

    let migrated = serde_json::to_value(&document)? != original;
    Ok(Decoded { document, migrated })
}

/// Give every entry without a usable id (blank, or already taken earlier in
/// its section) a fresh one. Order is preserved.
pub fn assign_unique_ids(document: &mut ResumeDocument) {
    ensure_unique_ids(&mut document.experience);
    ensure_unique_ids(&mut document.education);
    ensure_unique_ids(&mut document.skills);
    ensure_unique_ids(&mut document.projects);
    ensure_unique_ids(&mut document.certifications);
}

fn ensure_unique_ids<E: Entry>(entries: &mut [E]) {
    let mut seen: HashSet<EntryId> = HashSet::with_capacity(entries.len());
    for entry in entries.iter_mut() {
        if entry.id().is_blank() || seen.contains(entry.id()) {
            let mut fresh = EntryId::generate();
            while seen.contains(&fresh) {
                fresh = EntryId::generate();
            }
            entry.set_id(fresh);
        }
        seen.insert(entry.id().clone());
    }
}

/// `{contactInfo: {fullName, linkedin, ...}, summary}` predates `personalInfo`.
fn migrate_contact_info(root: &mut Map<String, Value>) {
    if root.contains_key("personalInfo") {
        return;
    }
    let Some(Value::Object(contact)) = root.remove("contactInfo") else {
        return;
    };

    let mut info = Map::new();
    for (from, to) in [
        ("fullName", "name"),
        ("title", "title"),
        ("email", "email"),
        ("phone", "phone"),
        ("location", "location"),
        ("linkedin", "website"),
    ] {
        if let Some(v) = contact.get(from) {
            info.insert(to.to_string(), v.clone());
        }
    }
    if let Some(summary) = root.remove("summary") {
        info.insert("summary".to_string(), summary);
    }
    root.insert("personalInfo".to_string(), Value::Object(info));
}

fn normalize_personal_info(root: &mut Map<String, Value>) {
    match root.get_mut("personalInfo") {
        Some(Value::Object(info)) => normalize_fields(info),
        Some(_) => {
            root.remove("personalInfo");
        }
        None => {}
    }
}

fn normalize_section(root: &mut Map<String, Value>, section: &str) {
    let Some(slot) = root.get_mut(section) else {
        return;
    };
    let items = match slot.take() {
        Value::Array(items) => items,
        // Anything else (null, a stray object) is treated as an empty section
        _ => Vec::new(),
    };

    let normalized: Vec<Value> = items
        .into_iter()
        .filter_map(|item| normalize_entry(section, item))
        .collect();
    *slot = Value::Array(normalized);
}

fn normalize_entry(section: &str, item: Value) -> Option<Value> {
    let mut obj = match item {
        Value::Object(obj) => obj,
        // Skills were sometimes stored as bare names
        Value::String(name) if section == "skills" => {
            let mut obj = Map::new();
            obj.insert("name".to_string(), Value::String(name));
            obj
        }
        _ => return None,
    };

    normalize_fields(&mut obj);

    for list in ["achievements", "technologies"] {
        if let Some(slot) = obj.get_mut(list) {
            *slot = Value::Array(string_list(slot.take()));
        }
    }

    Some(Value::Object(obj))
}

/// Drop nulls and render scalar numbers/booleans held in text fields as
/// strings. `current` stays boolean.
fn normalize_fields(obj: &mut Map<String, Value>) {
    obj.retain(|_, v| !v.is_null());
    for (key, value) in obj.iter_mut() {
        if key == "current" {
            if !value.is_boolean() {
                *value = Value::Bool(truthy(value));
            }
            continue;
        }
        match value {
            Value::Number(n) => *value = Value::String(n.to_string()),
            Value::Bool(b) => *value = Value::String(b.to_string()),
            _ => {}
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim(), "true" | "1" | "on" | "yes"),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// Coerce an ordered list of tags into plain strings. `{name}` objects keep
/// their name; unusable items are dropped.
fn string_list(value: Value) -> Vec<Value> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(mut obj) => match obj.remove("name") {
                Some(Value::String(s)) => Some(s),
                _ => None,
            },
            _ => None,
        })
        .map(Value::String)
        .collect()
}
