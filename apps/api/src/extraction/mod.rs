//! Text extraction: PDF bytes → raw text → normalized text.
//!
//! Extraction is CPU-bound and synchronous; async callers must run it on the
//! blocking pool (`tokio::task::spawn_blocking`).

pub mod clean;
pub mod pdf;

use thiserror::Error;

pub use clean::clean_text;
pub use pdf::parse_pdf;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("Empty PDF file provided")]
    Empty,

    #[error("Could not extract text from PDF. Please ensure the PDF contains readable text.")]
    NoText,
}
