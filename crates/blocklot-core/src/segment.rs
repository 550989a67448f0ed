use crate::error::GuideError;
use crate::model::{Line, Page, Section};
use crate::template::CompiledTemplate;
use crate::values::parse_page_number;

/// Lines at the top of each page: title, section, subtitle, column headers.
pub const NUM_HEADER_LINES: usize = 4;

/// Lines at the bottom of each page: a marker, the page number, the section.
pub const NUM_FOOTER_LINES: usize = 3;

/// A page whose header and footer matched the template.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedPage {
    pub section: Section,
    pub page_number: u32,
    pub body: Vec<Line>,
}

/// The values carried by a page footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub page_number: u32,
    pub section: Section,
}

/// Split `page` into header, body and footer and validate both ends.
pub fn segment_page(
    page_index: usize,
    page: Page,
    template: &CompiledTemplate,
) -> Result<SegmentedPage, GuideError> {
    let mut lines = page.lines;

    if lines.len() < NUM_FOOTER_LINES {
        return Err(GuideError::InvalidFooter {
            page_index,
            reason: format!(
                "expected at least {} lines, page has {}",
                NUM_FOOTER_LINES,
                lines.len()
            ),
        });
    }
    let footer_lines = lines.split_off(lines.len() - NUM_FOOTER_LINES);
    let footer = parse_footer(page_index, &footer_lines)?;

    tracing::info!(
        page_number = footer.page_number,
        section = %footer.section,
        "processing page"
    );

    let body = if lines.len() >= NUM_HEADER_LINES {
        lines.split_off(NUM_HEADER_LINES)
    } else {
        Vec::new()
    };
    check_header(footer, &lines, template)?;

    Ok(SegmentedPage {
        section: footer.section,
        page_number: footer.page_number,
        body,
    })
}

/// Read the page number and section from the last three lines of a page.
pub fn parse_footer(page_index: usize, footer_lines: &[Line]) -> Result<Footer, GuideError> {
    let texts: Vec<&str> = footer_lines
        .iter()
        .map(|line| line.first_text().unwrap_or(""))
        .collect();
    let [_, page_text, section_text] = texts[..] else {
        return Err(GuideError::InvalidFooter {
            page_index,
            reason: format!(
                "expected {} footer lines, found {}",
                NUM_FOOTER_LINES,
                texts.len()
            ),
        });
    };

    let section = Section::from_label(section_text).ok_or_else(|| GuideError::InvalidFooter {
        page_index,
        reason: format!("borough must be a borough, found {section_text:?}"),
    })?;

    let page_number = parse_page_number(page_text).ok_or_else(|| GuideError::InvalidFooter {
        page_index,
        reason: format!("page number must be a positive number, found {page_text:?}"),
    })?;

    Ok(Footer {
        page_number,
        section,
    })
}

/// Compare the header lines fragment by fragment with the template.
fn check_header(
    footer: Footer,
    header_lines: &[Line],
    template: &CompiledTemplate,
) -> Result<(), GuideError> {
    let expected = template.expected_header(footer.section);
    for (i, expected_line) in expected.into_iter().enumerate() {
        let found = header_lines.get(i).map(Line::texts).unwrap_or_default();
        if found != expected_line {
            return Err(GuideError::MalformedHeader {
                page_number: footer.page_number,
                line: i + 1,
                expected: expected_line,
                found,
            });
        }
    }
    Ok(())
}
