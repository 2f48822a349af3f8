use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Known model identifiers. Each model implies exactly one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4o,
    Gpt4oMini,
    Gpt4Turbo,
    Gpt4,
    Gpt35Turbo,
    TextEmbeddingAda002,
    TextEmbedding3Small,
    TextEmbedding3Large,
    CodeDavinci002,
    TextDavinci002,
    TextDavinci003,
    Davinci,
}

/// Known encoding identifiers (BPE vocabularies shipped by tiktoken).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    O200kBase,
    Cl100kBase,
    P50kBase,
    R50kBase,
}

impl Model {
    pub const ALL: [Model; 12] = [
        Model::Gpt4o,
        Model::Gpt4oMini,
        Model::Gpt4Turbo,
        Model::Gpt4,
        Model::Gpt35Turbo,
        Model::TextEmbeddingAda002,
        Model::TextEmbedding3Small,
        Model::TextEmbedding3Large,
        Model::CodeDavinci002,
        Model::TextDavinci002,
        Model::TextDavinci003,
        Model::Davinci,
    ];

    /// The encoding this model tokenizes with.
    pub fn encoding(&self) -> Encoding {
        match self {
            Model::Gpt4o | Model::Gpt4oMini => Encoding::O200kBase,
            Model::Gpt4Turbo
            | Model::Gpt4
            | Model::Gpt35Turbo
            | Model::TextEmbeddingAda002
            | Model::TextEmbedding3Small
            | Model::TextEmbedding3Large => Encoding::Cl100kBase,
            Model::CodeDavinci002 | Model::TextDavinci002 | Model::TextDavinci003 => {
                Encoding::P50kBase
            }
            Model::Davinci => Encoding::R50kBase,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4Turbo => "gpt-4-turbo",
            Model::Gpt4 => "gpt-4",
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::TextEmbeddingAda002 => "text-embedding-ada-002",
            Model::TextEmbedding3Small => "text-embedding-3-small",
            Model::TextEmbedding3Large => "text-embedding-3-large",
            Model::CodeDavinci002 => "code-davinci-002",
            Model::TextDavinci002 => "text-davinci-002",
            Model::TextDavinci003 => "text-davinci-003",
            Model::Davinci => "davinci",
        }
    }
}

impl Encoding {
    pub const ALL: [Encoding; 4] = [
        Encoding::O200kBase,
        Encoding::Cl100kBase,
        Encoding::P50kBase,
        Encoding::R50kBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::O200kBase => "o200k_base",
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::R50kBase => "r50k_base",
        }
    }
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .iter()
            .find(|e| e.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownEncoding(s.to_string()))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-separated list of every known model name, for error messages.
pub fn known_models() -> String {
    Model::ALL
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated list of every known encoding name, for error messages.
pub fn known_encodings() -> String {
    Encoding::ALL
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
