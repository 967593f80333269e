//! Synthesis of the demo PDF document.
//!
//! Produces a small multi-page PDF with a heading and an optional footer line
//! per page, written with Helvetica so no fonts need embedding.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::error::PreviewError;

/// A4 in PDF points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;

const MARGIN_LEFT: i64 = 72;
const HEADING_Y: i64 = 770;
const FOOTER_Y: i64 = 740;
const HEADING_SIZE: i64 = 16;
const FOOTER_SIZE: i64 = 12;

/// Text of one demo page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoPage {
    pub heading: String,
    pub footer: Option<String>,
}

impl DemoPage {
    pub fn new(heading: impl Into<String>, footer: Option<&str>) -> Self {
        Self {
            heading: heading.into(),
            footer: footer.map(String::from),
        }
    }
}

/// The three pages of the stock demo document.
pub fn default_pages() -> Vec<DemoPage> {
    vec![
        DemoPage::new("Page 1 Content", Some("End of Page 1")),
        DemoPage::new("Page 2 Content", Some("End of Page 2")),
        DemoPage::new("Page 3 Content", None),
    ]
}

/// Builds a PDF with one page per entry and returns its bytes.
pub fn build(pages: &[DemoPage]) -> Result<Vec<u8>, PreviewError> {
    if pages.is_empty() {
        return Err(PreviewError::Pdf("document has no pages".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn page_content(page: &DemoPage) -> Content {
    let mut operations = text_line(&page.heading, HEADING_SIZE, HEADING_Y);
    if let Some(footer) = &page.footer {
        operations.extend(text_line(footer, FOOTER_SIZE, FOOTER_Y));
    }
    Content { operations }
}

fn text_line(text: &str, size: i64, y: i64) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), size.into()]),
        Operation::new("Td", vec![MARGIN_LEFT.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_default_pages() {
        let pages = default_pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].heading, "Page 1 Content");
        assert_eq!(pages[1].footer.as_deref(), Some("End of Page 2"));
        assert_eq!(pages[2].footer, None);
    }

    #[test]
    fn test_build_produces_pdf() {
        let bytes = build(&default_pages()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(contains(&bytes, b"(Page 1 Content)"));
        assert!(contains(&bytes, b"(End of Page 2)"));
        assert!(contains(&bytes, b"%%EOF"));
    }

    #[test]
    fn test_build_page_count_round_trips() {
        let bytes = build(&default_pages()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_build_rejects_empty() {
        assert!(matches!(build(&[]), Err(PreviewError::Pdf(_))));
    }
}
