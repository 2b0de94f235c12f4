//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Record storage (files on disk, or in memory)
//! - Error types

pub mod error;
pub mod storage;
