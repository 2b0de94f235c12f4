//! Services layer - business operations over the domain.
//!
//! This module contains business logic and operations:
//! - Resume store with write-through persistence
//! - Normalization of legacy persisted records
//! - HTML rendering per template
//! - PDF export planning

pub mod export;
pub mod legacy;
pub mod render;
pub mod store;
