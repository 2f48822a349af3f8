use std::sync::Arc;

use tiktoken_rs::CoreBPE;

use tiktally_core::{Encoding, Rank, Result};

/// A loaded tokenizer: a tiktoken BPE plus the encoding it was loaded for.
///
/// The recorded encoding is the handle's identity; consistency checks against
/// model or encoding names compare encodings, never BPE internals. Cloning is
/// cheap (the BPE is shared).
#[derive(Clone)]
pub struct Tokenizer {
    encoding: Encoding,
    bpe: Arc<CoreBPE>,
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl Tokenizer {
    /// Load the tokenizer for an encoding.
    pub fn load(encoding: Encoding) -> Result<Self> {
        tracing::debug!("loading tokenizer for {}", encoding);
        let bpe = match encoding {
            Encoding::O200kBase => tiktoken_rs::o200k_base(),
            Encoding::Cl100kBase => tiktoken_rs::cl100k_base(),
            Encoding::P50kBase => tiktoken_rs::p50k_base(),
            Encoding::R50kBase => tiktoken_rs::r50k_base(),
        }?;

        Ok(Self {
            encoding,
            bpe: Arc::new(bpe),
        })
    }

    /// Resolve a model name to its encoding and load that tokenizer.
    pub fn for_model(model: &str) -> Result<Self> {
        let encoding = tiktally_core::resolve(Some(model), None)?;
        Self::load(encoding)
    }

    /// The encoding this tokenizer was loaded for.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode text into token ids. Special-token text is treated as ordinary
    /// text.
    pub fn encode(&self, text: &str) -> Vec<Rank> {
        self.bpe.encode_ordinary(text)
    }

    /// Encode text, mapping special tokens to their reserved ids.
    pub fn encode_with_special(&self, text: &str) -> Vec<Rank> {
        self.bpe.encode_with_special_tokens(text)
    }

    /// Count tokens in a single string.
    pub fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }

    /// Count tokens for multiple strings.
    pub fn count_batch(&self, texts: &[&str]) -> Vec<usize> {
        texts.iter().map(|text| self.count(text)).collect()
    }
}
