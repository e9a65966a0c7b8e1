//! Template Registry: the closed set of template variants and their metadata.
//!
//! Ids are persisted by callers. New variants are appended to `TemplateId::ALL`
//! and `REGISTRY`, never inserted, so existing ids and list order stay stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::font_metrics::PageConfig;
use crate::models::Resume;
use crate::render::document::DocumentTree;
use crate::render::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    ModernProfessional,
    ClassicExecutive,
    TechFocused,
    FreshGraduate,
    MinimalElegant,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::ModernProfessional,
        TemplateId::ClassicExecutive,
        TemplateId::TechFocused,
        TemplateId::FreshGraduate,
        TemplateId::MinimalElegant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::ModernProfessional => "modern-professional",
            TemplateId::ClassicExecutive => "classic-executive",
            TemplateId::TechFocused => "tech-focused",
            TemplateId::FreshGraduate => "fresh-graduate",
            TemplateId::MinimalElegant => "minimal-elegant",
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        match self {
            TemplateId::ModernProfessional => 0,
            TemplateId::ClassicExecutive => 1,
            TemplateId::TechFocused => 2,
            TemplateId::FreshGraduate => 3,
            TemplateId::MinimalElegant => 4,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown template id '{0}'")]
    UnknownTemplate(String),
}

impl FromStr for TemplateId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownTemplate(s.to_string()))
    }
}

type RenderFn = fn(&Resume, &PageConfig) -> DocumentTree;

/// One row of the dispatch table.
pub struct TemplateEntry {
    pub id: TemplateId,
    pub display_name: &'static str,
    pub category_tag: &'static str,
    render_fn: RenderFn,
}

impl TemplateEntry {
    pub fn render(&self, resume: &Resume, page: &PageConfig) -> DocumentTree {
        (self.render_fn)(resume, page)
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id,
            display_name: self.display_name,
            category_tag: self.category_tag,
        }
    }
}

/// Listing row for template pickers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub display_name: &'static str,
    pub category_tag: &'static str,
}

static REGISTRY: [TemplateEntry; 5] = [
    TemplateEntry {
        id: TemplateId::ModernProfessional,
        display_name: "Modern Professional",
        category_tag: "professional",
        render_fn: templates::modern_professional::render,
    },
    TemplateEntry {
        id: TemplateId::ClassicExecutive,
        display_name: "Classic Executive",
        category_tag: "executive",
        render_fn: templates::classic_executive::render,
    },
    TemplateEntry {
        id: TemplateId::TechFocused,
        display_name: "Tech Focused",
        category_tag: "technical",
        render_fn: templates::tech_focused::render,
    },
    TemplateEntry {
        id: TemplateId::FreshGraduate,
        display_name: "Fresh Graduate",
        category_tag: "entry-level",
        render_fn: templates::fresh_graduate::render,
    },
    TemplateEntry {
        id: TemplateId::MinimalElegant,
        display_name: "Minimal Elegant",
        category_tag: "minimal",
        render_fn: templates::minimal_elegant::render,
    },
];

pub fn entry(id: TemplateId) -> &'static TemplateEntry {
    &REGISTRY[id.index()]
}

/// Looks up a template by its wire id. There is no fallback template.
pub fn resolve(template_id: &str) -> Result<&'static TemplateEntry, RegistryError> {
    template_id.parse::<TemplateId>().map(entry)
}

pub fn list() -> Vec<TemplateSummary> {
    REGISTRY.iter().map(TemplateEntry::summary).collect()
}
