use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("fragment extraction failed: {0}")]
    Extraction(String),

    #[error("page {page_index}: invalid footer: {reason}")]
    InvalidFooter { page_index: usize, reason: String },

    #[error("page {page_number}: header line {line} must be {expected:?}, found {found:?}")]
    MalformedHeader {
        page_number: u32,
        line: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("page {page_number}: unable to coalesce {text:?} at x={x} into previous row")]
    UnmatchedContinuation {
        page_number: u32,
        x: f64,
        text: String,
    },

    #[error("page {page_number}: sparse row should not be a management office: {row_text:?}")]
    ForbiddenBadRow { page_number: u32, row_text: String },

    #[error("failed to load template from {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    #[error("invalid template: {0}")]
    TemplateInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GuideError {
    /// True for the structural validation failures that abort a run.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GuideError::InvalidFooter { .. }
                | GuideError::MalformedHeader { .. }
                | GuideError::UnmatchedContinuation { .. }
                | GuideError::ForbiddenBadRow { .. }
        )
    }
}
