//! Document input
//! Turns resume files into plain text for skill extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::{DocumentSource, FileDocumentSource};
