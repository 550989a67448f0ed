use crate::error::GuideError;
use crate::extraction::{FragmentSource, PageFragments};

/// Reads pages already serialized as [`PageFragments`] JSON.
pub struct FragmentJsonSource;

impl FragmentJsonSource {
    pub fn new() -> Self {
        FragmentJsonSource
    }
}

impl Default for FragmentJsonSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentSource for FragmentJsonSource {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageFragments>, GuideError> {
        let mut pages: Vec<PageFragments> = serde_json::from_slice(bytes)
            .map_err(|e| GuideError::Extraction(format!("invalid fragment dump: {e}")))?;
        pages.sort_by_key(|p| p.page_index);
        for pair in pages.windows(2) {
            if pair[0].page_index == pair[1].page_index {
                return Err(GuideError::Extraction(format!(
                    "page index {} appears more than once",
                    pair[0].page_index
                )));
            }
        }
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "fragments"
    }
}
