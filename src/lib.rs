pub mod export;
pub mod parser;
pub mod settings;

pub use parser::{extract, lines_to_array, tweet_links, ExtractionResult};
