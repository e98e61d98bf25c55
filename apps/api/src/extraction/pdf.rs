use std::panic::{catch_unwind, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, warn};

use super::ExtractionError;

/// Primary output shorter than this triggers the fallback extractor.
const MIN_PRIMARY_CHARS: usize = 50;

/// Extracts text from an in-memory PDF.
///
/// Runs `pdf-extract` first. When that yields fewer than 50 characters the
/// `lopdf` page walker runs instead and its output wins, even if shorter.
/// Either extractor failing (or panicking on a malformed font) counts as an
/// empty result rather than an error.
pub fn parse_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let text = select_text(extract_with_pdf_extract(bytes), || extract_with_lopdf(bytes));
    if text.is_empty() {
        return Err(ExtractionError::NoText);
    }

    Ok(text)
}

/// Keeps the primary text unless it is too short, in which case the fallback
/// output replaces it outright.
fn select_text(primary: String, fallback: impl FnOnce() -> String) -> String {
    debug!(chars = primary.chars().count(), "pdf-extract finished");
    if primary.chars().count() >= MIN_PRIMARY_CHARS {
        return primary;
    }

    let text = fallback();
    debug!(chars = text.chars().count(), "lopdf fallback finished");
    text
}

fn extract_with_pdf_extract(bytes: &[u8]) -> String {
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => text.trim().to_string(),
        Ok(Err(e)) => {
            warn!("pdf-extract failed: {e}");
            String::new()
        }
        Err(_) => {
            warn!("pdf-extract panicked while reading document");
            String::new()
        }
    }
}

fn extract_with_lopdf(bytes: &[u8]) -> String {
    match catch_unwind(AssertUnwindSafe(|| lopdf_page_text(bytes))) {
        Ok(Ok(text)) => text.trim().to_string(),
        Ok(Err(e)) => {
            warn!("lopdf extraction failed: {e}");
            String::new()
        }
        Err(_) => {
            warn!("lopdf panicked while reading document");
            String::new()
        }
    }
}

/// Walks every page in page order and concatenates their text.
fn lopdf_page_text(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let mut document = Document::load_mem(bytes)?;

    if document.is_encrypted() {
        // Many "protected" resumes only carry an owner password.
        document.decrypt("")?;
    }

    let mut page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    page_numbers.sort_unstable();

    let mut text = String::new();
    for page in page_numbers {
        match document.extract_text(&[page]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => warn!("lopdf could not read page {page}: {e}"),
        }
    }
    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::encryption::{decrypt_object, get_encryption_key};
    use lopdf::{dictionary, Object, Stream};

    /// Builds a one-page PDF whose page draws each line with a standard font.
    pub(crate) fn build_pdf(lines: &[&str]) -> Vec<u8> {
        save(build_document(lines))
    }

    /// Same page as `build_pdf`, RC4-encrypted with an owner password only,
    /// so the empty user password opens it.
    fn build_owner_protected_pdf(lines: &[&str]) -> Vec<u8> {
        let mut doc = build_document(lines);
        let encrypt_id = doc.add_object(dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "Length" => 40,
            "O" => Object::string_literal(vec![0x5a_u8; 32]),
            "P" => -4,
        });
        doc.trailer.set("Encrypt", encrypt_id);
        doc.trailer.set(
            "ID",
            vec![
                Object::string_literal("hirelens-fixture"),
                Object::string_literal("hirelens-fixture"),
            ],
        );

        let key = get_encryption_key(&doc, "", false).expect("key derives");
        for (&id, object) in doc.objects.iter_mut() {
            if id == encrypt_id {
                continue;
            }
            // RC4 is symmetric, so decrypting plaintext encrypts it.
            if let Ok(cipher) = decrypt_object(&key, id, object) {
                if let Object::Stream(stream) = object {
                    stream.set_content(cipher);
                }
            }
        }
        save(doc)
    }

    fn save(mut doc: Document) -> Vec<u8> {
        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("pdf saves");
        buf
    }

    fn build_document(lines: &[&str]) -> Document {
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

        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 11.into()]),
            Operation::new("TL", vec![14.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for line in lines {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_empty_bytes_rejected() {
        assert_eq!(parse_pdf(&[]), Err(ExtractionError::Empty));
    }

    #[test]
    fn test_garbage_bytes_yield_no_text() {
        let result = parse_pdf(b"this is definitely not a pdf document");
        assert_eq!(result, Err(ExtractionError::NoText));
    }

    #[test]
    fn test_extracts_text_from_generated_pdf() {
        let pdf = build_pdf(&[
            "Jane Doe Senior Software Engineer",
            "Developed Python services and led a team of engineers",
        ]);
        let text = parse_pdf(&pdf).expect("text extracted");
        assert!(text.contains("Jane"), "got: {text}");
        assert!(text.contains("Python"), "got: {text}");
    }

    #[test]
    fn test_lopdf_walker_reads_short_documents() {
        let pdf = build_pdf(&["Rust"]);
        let text = extract_with_lopdf(&pdf);
        assert!(text.contains("Rust"), "got: {text}");
    }

    #[test]
    fn test_short_primary_text_is_replaced_by_fallback() {
        let primary = "Jane Doe, Engineer".to_string();
        assert_eq!(select_text(primary, || "Jane".to_string()), "Jane");
    }

    #[test]
    fn test_long_primary_text_skips_fallback() {
        let primary = "Senior engineer with ten years of Rust and Python experience".to_string();
        let text = select_text(primary.clone(), || panic!("fallback should not run"));
        assert_eq!(text, primary);
    }

    #[test]
    fn test_lopdf_walker_opens_owner_protected_documents() {
        let pdf = build_owner_protected_pdf(&["Kubernetes"]);
        let mut document = Document::load_mem(&pdf).expect("pdf loads");
        assert!(document.is_encrypted());
        document.decrypt("").expect("empty password opens the document");

        let text = extract_with_lopdf(&pdf);
        assert!(text.contains("Kubernetes"), "got: {text}");
    }
}
