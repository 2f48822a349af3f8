use anyhow::Result;
use tiktally_core::{Encoding, Model};

pub fn models() -> Result<()> {
    println!("Models:");
    for model in Model::ALL {
        println!("  {:<24} {}", model.as_str(), model.encoding());
    }

    Ok(())
}

pub fn encodings() -> Result<()> {
    println!("Encodings:");
    for encoding in Encoding::ALL {
        println!("  {}", encoding);
    }

    Ok(())
}
