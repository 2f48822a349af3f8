use thiserror::Error;

use crate::registry::{known_encodings, known_models, Encoding, Model};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown model: {0} (known models: {models})", models = known_models())]
    UnknownModel(String),

    #[error("Unknown encoding: {0} (known encodings: {encodings})", encodings = known_encodings())]
    UnknownEncoding(String),

    #[error("Model {model} uses encoding {expected}, not {requested}", expected = .model.encoding())]
    ModelEncodingMismatch { model: Model, requested: Encoding },

    #[error("Tokenizer was loaded for {loaded}, but {resolved} was requested")]
    TokenizerMismatch { resolved: Encoding, loaded: Encoding },

    #[error(
        "No model, encoding, or tokenizer given (known models: {models}; known encodings: {encodings})",
        models = known_models(),
        encodings = known_encodings()
    )]
    NoSelector,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
