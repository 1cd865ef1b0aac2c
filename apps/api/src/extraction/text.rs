//! PDF text extraction: a primary whole-document backend plus a page-walking
//! fallback for documents the primary cannot read.

use tracing::debug;

use crate::errors::AppError;

/// Extraction seam held in app state as `Arc<dyn TextExtractor>`.
/// Synchronous and CPU-bound; callers run it on a blocking thread.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, AppError>;
}

/// Production extractor. Runs `pdf-extract` over the whole buffer first; if
/// that errors or yields only whitespace, walks pages with lopdf and joins
/// page texts with a newline. Image-only PDFs are unsupported: both
/// backends come back empty and the document is reported unreadable.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, AppError> {
        let primary = match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(e) => {
                debug!("Primary PDF backend failed: {e}");
                String::new()
            }
        };
        let trimmed = primary.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }

        debug!("Primary PDF backend produced no text, trying page-walk fallback");
        let fallback = extract_page_by_page(bytes).unwrap_or_default();
        let trimmed = fallback.trim();
        if trimmed.is_empty() {
            return Err(AppError::Extraction(
                "Could not extract text from PDF".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

/// Fallback backend: load with lopdf, extract each page in page-number
/// order, join with a newline. Pages that fail to decode contribute nothing.
fn extract_page_by_page(bytes: &[u8]) -> Option<String> {
    let doc = lopdf::Document::load_mem(bytes).ok()?;
    let mut pages = Vec::new();
    for (page_num, _object_id) in doc.get_pages() {
        pages.push(doc.extract_text(&[page_num]).unwrap_or_default());
    }
    Some(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use super::*;

    /// Builds a small Helvetica PDF with one page per entry in `pages`.
    fn make_pdf(pages: &[&[&str]]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for lines in pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 750.into()]),
            ];
            for line in *lines {
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
                operations.push(Operation::new("Td", vec![0.into(), (-16).into()]));
            }
            operations.push(Operation::new("ET", vec![]));
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extracts_text_from_single_page() {
        let bytes = make_pdf(&[&["Jane Doe", "Python developer"]]);
        let text = PdfTextExtractor.extract(&bytes).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Python developer"));
    }

    #[test]
    fn test_concatenates_pages_in_order() {
        let bytes = make_pdf(&[&["First page marker"], &["Second page marker"]]);
        let text = PdfTextExtractor.extract(&bytes).unwrap();
        let first = text.find("First page marker").unwrap();
        let second = text.find("Second page marker").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_same_bytes_extract_identically() {
        let bytes = make_pdf(&[&["Deterministic content"]]);
        let a = PdfTextExtractor.extract(&bytes).unwrap();
        let b = PdfTextExtractor.extract(&bytes).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_blank_page_reports_unreadable() {
        let bytes = make_pdf(&[&[]]);
        let err = PdfTextExtractor.extract(&bytes).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_non_pdf_bytes_report_unreadable() {
        let err = PdfTextExtractor.extract(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_fallback_reads_pages_directly() {
        let bytes = make_pdf(&[&["Fallback marker"]]);
        let text = extract_page_by_page(&bytes).unwrap();
        assert!(text.contains("Fallback marker"));
    }
}
