pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod inverted_index;
pub mod report;
pub mod scorer;
pub mod tokenizer;
