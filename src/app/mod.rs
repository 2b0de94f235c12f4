//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ResumeDocument, entries, TemplateId, AppConfig)
//! - `services/` - Business operations (store, legacy migration, render, export)
//! - `infrastructure/` - External integrations (key-value storage, error)

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use domain::{AppConfig, EntryId, ResumeDocument, TemplateId};
pub use infrastructure::error::{AppError, ExportError, StorageError, StoreError};
pub use infrastructure::storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use services::export::{ExportLayout, ExportedFile, PdfSink, Rasterizer, export_pdf, export_file_name};
pub use services::render::{render_html, render_page};
pub use services::store::{LoadReport, LoadSource, Outcome, ResumeStore};
