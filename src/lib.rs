pub mod error;
pub mod localization;
pub mod provider;
pub mod scoring;
pub mod search;
pub mod tokenizer;
