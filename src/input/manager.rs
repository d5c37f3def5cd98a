//! Document source: resolves a path to the plain text of the document

use crate::error::{CareerFitError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::path::Path;

/// Anything that can turn a document handle into plain text
pub trait DocumentSource {
    fn read_text(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Reads PDF, plain text and Markdown files from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDocumentSource;

impl FileDocumentSource {
    pub fn new() -> Self {
        Self
    }

    pub fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            CareerFitError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }
}

impl DocumentSource for FileDocumentSource {
    async fn read_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CareerFitError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(CareerFitError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(text)
    }
}
