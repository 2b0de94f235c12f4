use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The visual layouts a resume can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Minimalist,
    Classic,
    Modern,
}

impl TemplateId {
    /// Identifier as persisted and accepted on input
    pub fn key(&self) -> &'static str {
        match self {
            Self::Minimalist => "minimalist",
            Self::Classic => "classic",
            Self::Modern => "modern",
        }
    }

    /// Get the display name for this template
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Minimalist => "Minimalist",
            Self::Classic => "Classic",
            Self::Modern => "Modern",
        }
    }

    /// Get all available templates
    pub fn all() -> &'static [TemplateId] {
        &[Self::Minimalist, Self::Classic, Self::Modern]
    }

    /// Parse a template id, falling back to the default for anything unknown.
    /// Renderers use this; the store itself rejects unknown ids instead.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.key() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}
