//! Selector facade: pick a tokenizer from any of a model name, an encoding
//! name, or an already-loaded handle, and tokenize strings or files with it.

use std::fs;
use std::path::Path;

use tiktally_core::{resolve, Encoding, Error, Rank, Result};

use crate::tokenizer::Tokenizer;

/// An optional {model, encoding, tokenizer} triple naming the tokenizer to
/// use. All three default to unset; at least one must be supplied or
/// resolution fails.
#[derive(Default, Clone, Copy)]
pub struct Selector<'a> {
    model: Option<&'a str>,
    encoding: Option<&'a str>,
    tokenizer: Option<&'a Tokenizer>,
}

impl<'a> Selector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, name: &'a str) -> Self {
        self.model = Some(name);
        self
    }

    pub fn encoding(mut self, name: &'a str) -> Self {
        self.encoding = Some(name);
        self
    }

    pub fn tokenizer(mut self, tokenizer: &'a Tokenizer) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Resolve the names alone to an encoding, without touching the handle.
    /// Returns None when no name was given.
    pub fn resolve_encoding(&self) -> Result<Option<Encoding>> {
        match (self.model, self.encoding) {
            (None, None) => Ok(None),
            (model, encoding) => resolve(model, encoding).map(Some),
        }
    }

    /// Resolve the triple to a ready tokenizer.
    ///
    /// A supplied handle must agree with whatever the names resolve to; with
    /// no handle, a tokenizer is loaded for the resolved encoding.
    pub fn resolve(&self) -> Result<Tokenizer> {
        let named = self.resolve_encoding()?;

        match (self.tokenizer, named) {
            (Some(tokenizer), Some(resolved)) if tokenizer.encoding() != resolved => {
                Err(Error::TokenizerMismatch {
                    resolved,
                    loaded: tokenizer.encoding(),
                })
            }
            (Some(tokenizer), _) => Ok(tokenizer.clone()),
            (None, Some(resolved)) => Tokenizer::load(resolved),
            (None, None) => Err(Error::NoSelector),
        }
    }
}

/// Tokenize a string into token ids.
pub fn tokenize_str(text: &str, selector: &Selector) -> Result<Vec<Rank>> {
    Ok(selector.resolve()?.encode(text))
}

/// Count tokens in a string. Always equals `tokenize_str(..).len()`.
pub fn count_str(text: &str, selector: &Selector) -> Result<usize> {
    Ok(tokenize_str(text, selector)?.len())
}

/// Tokenize a file's full contents. The file is read whole, as UTF-8 text.
pub fn tokenize_file(path: impl AsRef<Path>, selector: &Selector) -> Result<Vec<Rank>> {
    let contents = fs::read_to_string(path.as_ref())?;
    tokenize_str(&contents, selector)
}

/// Count tokens in a file's full contents.
pub fn count_file(path: impl AsRef<Path>, selector: &Selector) -> Result<usize> {
    Ok(tokenize_file(path, selector)?.len())
}
