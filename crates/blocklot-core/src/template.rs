//! The fixed page template every page is validated against.
//!
//! Title and subtitle change between editions of the guide, so they are
//! loaded from JSON. Column names and sections are fixed.

use crate::error::GuideError;
use crate::model::{Section, COLUMN_NAMES};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

const NYCHA_2024_JSON: &str = include_str!("../../../templates/nycha-2024.json");

/// Available builtin templates.
pub const PRESETS: &[&str] = &["nycha-2024"];

/// Name of the preset used when none is given.
pub const DEFAULT_PRESET: &str = "nycha-2024";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// First header line, a single fragment. Trailing whitespace is significant.
    pub title: String,
    /// Third header line, a single fragment.
    pub subtitle: String,
    /// Case-insensitive regex. Sparse rows matching it abort the run.
    pub forbidden_pattern: String,
}

/// Load a builtin template by name.
pub fn load_preset(name: &str) -> Result<PageTemplate, GuideError> {
    match name {
        "nycha-2024" => parse_template_str(NYCHA_2024_JSON),
        _ => Err(GuideError::TemplateInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// Load a template from a JSON file.
pub fn load_template(path: &Path) -> Result<PageTemplate, GuideError> {
    let content = std::fs::read_to_string(path).map_err(|e| GuideError::TemplateLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let template: PageTemplate =
        serde_json::from_str(&content).map_err(|e| GuideError::TemplateLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_template(&template)?;
    Ok(template)
}

/// Parse a template from a JSON string (no file path context).
pub fn parse_template_str(json: &str) -> Result<PageTemplate, GuideError> {
    let template: PageTemplate = serde_json::from_str(json)?;
    validate_template(&template)?;
    Ok(template)
}

/// Check that a template is usable.
pub fn validate_template(template: &PageTemplate) -> Result<(), GuideError> {
    if template.name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if template.title.is_empty() {
        return Err(invalid("title must not be empty"));
    }
    if template.subtitle.is_empty() {
        return Err(invalid("subtitle must not be empty"));
    }
    if template.forbidden_pattern.is_empty() {
        return Err(invalid("forbidden_pattern must not be empty"));
    }
    compile_pattern(&template.forbidden_pattern)?;
    Ok(())
}

fn invalid(reason: &str) -> GuideError {
    GuideError::TemplateInvalid(reason.to_string())
}

fn compile_pattern(pattern: &str) -> Result<Regex, GuideError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            GuideError::TemplateInvalid(format!("invalid forbidden_pattern '{pattern}': {e}"))
        })
}

/// A validated template with its pattern compiled, shared by every page of a run.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    template: PageTemplate,
    forbidden: Regex,
}

impl CompiledTemplate {
    pub fn new(template: PageTemplate) -> Result<Self, GuideError> {
        validate_template(&template)?;
        let forbidden = compile_pattern(&template.forbidden_pattern)?;
        Ok(CompiledTemplate {
            template,
            forbidden,
        })
    }

    /// The four header lines expected on a page of `section`.
    pub fn expected_header(&self, section: Section) -> [Vec<String>; 4] {
        [
            vec![self.template.title.clone()],
            vec![section.label().to_string()],
            vec![self.template.subtitle.clone()],
            COLUMN_NAMES.iter().map(|c| c.to_string()).collect(),
        ]
    }

    pub fn is_forbidden(&self, row_text: &str) -> bool {
        self.forbidden.is_match(row_text)
    }
}
