//! Report assembly and rendering

pub mod formatter;
pub mod report;

pub use formatter::{ReportGenerator, OutputFormatter};
pub use report::{AnalysisReport, ReportMetadata};
