use anyhow::Result;
use tiktally_config::Config;
use tiktally_tokens::{tokenize_file, tokenize_str, Selector};

use crate::cli::TokenizeArgs;

pub fn handle(args: TokenizeArgs, config: &Config) -> Result<()> {
    let tokenizer = super::selector_for(&args.selector, config).resolve()?;
    let encoding = tokenizer.encoding();
    let selector = Selector::new().tokenizer(&tokenizer);

    let tokens = if let Some(file) = &args.file {
        tokenize_file(file, &selector)?
    } else if let Some(text) = &args.text {
        tokenize_str(text, &selector)?
    } else {
        anyhow::bail!("Provide TEXT or --file");
    };

    if args.json {
        let out = serde_json::json!({
            "encoding": encoding.as_str(),
            "count": tokens.len(),
            "tokens": tokens,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let ids: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        println!("{}", ids.join(" "));
    }

    Ok(())
}
