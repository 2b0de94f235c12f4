//! Craftfolio - resume data store, template rendering and PDF export planning.

pub mod app;

pub use app::*;
