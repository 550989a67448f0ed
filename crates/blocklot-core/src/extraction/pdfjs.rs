use crate::error::GuideError;
use crate::extraction::{FragmentSource, PageFragments};
use crate::model::TextFragment;
use serde::Deserialize;

/// Reads a JSON dump of pdf.js `getTextContent()` results.
///
/// Expected shape: `{"pages": [{"items": [{"str": "...", "transform": [a, b, c, d, x, y]}]}]}`.
/// The text must have been extracted with item combining disabled, so every
/// table cell arrives as its own item. Marked-content delimiters such as
/// `{"type": "beginMarkedContent"}` carry no text and are skipped.
pub struct PdfJsTextSource;

impl PdfJsTextSource {
    pub fn new() -> Self {
        PdfJsTextSource
    }
}

impl Default for PdfJsTextSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct TextContentDump {
    pages: Vec<TextContent>,
}

#[derive(Debug, Deserialize)]
struct TextContent {
    items: Vec<ContentItem>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentItem {
    Text(TextItem),
    Marked(MarkedContent),
}

#[derive(Debug, Deserialize)]
struct MarkedContent {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct TextItem {
    #[serde(rename = "str")]
    text: String,
    transform: Vec<f64>,
}

impl FragmentSource for PdfJsTextSource {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageFragments>, GuideError> {
        let dump: TextContentDump = serde_json::from_slice(bytes)
            .map_err(|e| GuideError::Extraction(format!("invalid pdf.js text dump: {e}")))?;

        dump.pages
            .into_iter()
            .enumerate()
            .map(|(page_index, content)| {
                let fragments = page_fragments(page_index, content.items)?;
                Ok(PageFragments {
                    page_index,
                    fragments,
                })
            })
            .collect()
    }

    fn backend_name(&self) -> &str {
        "pdfjs"
    }
}

fn page_fragments(
    page_index: usize,
    items: Vec<ContentItem>,
) -> Result<Vec<TextFragment>, GuideError> {
    let mut fragments = Vec::with_capacity(items.len());
    for item in items {
        match item {
            ContentItem::Text(text) => fragments.push(item_to_fragment(page_index, text)?),
            ContentItem::Marked(marked) => {
                tracing::trace!(page_index, kind = %marked.kind, "skipped marked content");
            }
        }
    }
    Ok(fragments)
}

/// The translation components of the item's transform are its position.
fn item_to_fragment(page_index: usize, item: TextItem) -> Result<TextFragment, GuideError> {
    let TextItem { text, transform } = item;
    match transform[..] {
        [_, _, _, _, x, y] => Ok(TextFragment { x, y, text }),
        _ => Err(GuideError::Extraction(format!(
            "page {}: item {:?} has a {}-element transform, expected 6",
            page_index,
            text,
            transform.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_position_from_transform() {
        let json = br#"{
            "pages": [
                {"items": [
                    {"str": "BLOCK", "transform": [9, 0, 0, 9, 36.5, 701.2], "width": 30},
                    {"str": "LOT", "transform": [9, 0, 0, 9, 80, 701.2]}
                ]},
                {"items": []}
            ]
        }"#;
        let pages = PdfJsTextSource::new().extract_pages(json).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_index, 0);
        let block = TextFragment::new(36.5, 701.2, "BLOCK");
        assert_eq!(pages[0].fragments[0], block);
        assert!(pages[1].fragments.is_empty());
    }

    #[test]
    fn test_marked_content_items_skipped() {
        let json = br#"{
            "pages": [
                {"items": [
                    {"type": "beginMarkedContentProps", "id": "mc0", "tag": "P"},
                    {"str": "BRONX", "transform": [9, 0, 0, 9, 36, 760]},
                    {"type": "endMarkedContent"},
                    {"type": "beginMarkedContent", "tag": "Artifact"},
                    {"str": "12", "transform": [9, 0, 0, 9, 300, 30]},
                    {"type": "endMarkedContent"}
                ]}
            ]
        }"#;
        let pages = PdfJsTextSource::new().extract_pages(json).unwrap();
        let texts: Vec<&str> = pages[0].fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["BRONX", "12"]);
    }

    #[test]
    fn test_item_without_text_or_type_rejected() {
        let json = br#"{"pages": [{"items": [{"transform": [9, 0, 0, 9, 1, 2]}]}]}"#;
        assert!(PdfJsTextSource::new().extract_pages(json).is_err());
    }

    #[test]
    fn test_short_transform_rejected() {
        let json = br#"{"pages": [{"items": [{"str": "x", "transform": [1, 2]}]}]}"#;
        assert!(matches!(
            PdfJsTextSource::new().extract_pages(json),
            Err(GuideError::Extraction(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(PdfJsTextSource::new().extract_pages(b"not json").is_err());
    }
}
