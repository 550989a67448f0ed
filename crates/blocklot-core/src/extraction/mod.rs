pub mod fragments;
pub mod pdfjs;

use crate::error::GuideError;
use crate::model::TextFragment;
use serde::{Deserialize, Serialize};

/// Positioned text of a single page, in no particular order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFragments {
    /// Zero-based position of the page in the document.
    pub page_index: usize,
    pub fragments: Vec<TextFragment>,
}

/// Trait for backends that expose a document as positioned fragments.
pub trait FragmentSource: Send + Sync {
    /// Extract fragments from document bytes, returning one entry per page.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageFragments>, GuideError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
