//! Tokenization helpers over tiktoken
//!
//! This crate contains:
//! - The Tokenizer handle (a loaded BPE plus its encoding identity)
//! - The Selector facade for {model, encoding, tokenizer} triples
//! - String, file, and directory tokenize/count helpers

pub mod dir;
pub mod selector;
pub mod tokenizer;

pub use dir::{count_dir, DirCount, DirOptions, FileCount};
pub use selector::{count_file, count_str, tokenize_file, tokenize_str, Selector};
pub use tokenizer::Tokenizer;

pub use tiktally_core::{Encoding, Error, Model, Rank, Result};
