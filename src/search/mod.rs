mod config;
mod engine;
mod search_result;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use search_result::SearchResult;
