//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod croatian;
mod pipeline;

pub use analyzer::Analyzer;
pub use croatian::CroatianAnalyzer;
pub use pipeline::PipelineAnalyzer;
