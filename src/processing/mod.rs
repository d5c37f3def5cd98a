//! Skill matching and recommendation engine

pub mod tokenizer;
pub mod vocabulary;
pub mod extractor;
pub mod resolver;
pub mod scoring;
pub mod recommend;
pub mod analyzer;
