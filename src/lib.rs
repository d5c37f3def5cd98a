//! Career fit library: skill extraction, role scoring and role suggestions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use catalog::{JobCatalog, Role};
pub use config::Config;
pub use error::{CareerFitError, Result};
pub use processing::analyzer::{AnalysisEngine, AnalysisResult};
