//! Resolution of {model name, encoding name} pairs to a single encoding.

use crate::error::{Error, Result};
use crate::registry::{Encoding, Model};

/// Resolve an optional model name and/or encoding name to the one encoding
/// to tokenize with.
///
/// Guard checks run in order: unknown names fail first, then a model/encoding
/// pair that disagrees with the registry, then the empty call. A model's
/// registry encoding wins whenever a model is given; a bare encoding name is
/// used as-is.
pub fn resolve(model: Option<&str>, encoding: Option<&str>) -> Result<Encoding> {
    let model = model.map(str::parse::<Model>).transpose()?;
    let requested = encoding.map(str::parse::<Encoding>).transpose()?;

    match (model, requested) {
        (Some(model), Some(requested)) if model.encoding() != requested => {
            Err(Error::ModelEncodingMismatch { model, requested })
        }
        (Some(model), _) => Ok(model.encoding()),
        (None, Some(requested)) => Ok(requested),
        (None, None) => Err(Error::NoSelector),
    }
}
