pub mod engine;
pub mod search_result;
