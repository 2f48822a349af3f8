use anyhow::Result;
use tiktally_config::Config;
use tiktally_tokens::{count_dir, count_file, count_str, DirOptions, Selector};

use crate::cli::CountArgs;

pub fn handle(args: CountArgs, config: &Config) -> Result<()> {
    // Resolve the tokenizer once and reuse it for every file
    let tokenizer = super::selector_for(&args.selector, config).resolve()?;
    let encoding = tokenizer.encoding();
    tracing::debug!("counting with {}", encoding);
    let selector = Selector::new().tokenizer(&tokenizer);

    if let Some(dir) = &args.dir {
        let mut exclude = config.walk.exclude.clone();
        exclude.extend(args.exclude.iter().cloned());

        let options = DirOptions {
            recursive: args.recursive,
            max_files: args.max_files,
            exclude,
        };

        let counts = count_dir(dir, &selector, &options)?;

        if args.json {
            let files: Vec<_> = counts
                .files
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "path": f.path.display().to_string(),
                        "tokens": f.tokens,
                    })
                })
                .collect();
            let out = serde_json::json!({
                "encoding": encoding.as_str(),
                "files": files,
                "total": counts.total,
                "skipped": counts.skipped,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            for file in &counts.files {
                println!("{:>10}  {}", file.tokens, file.path.display());
            }
            println!("Total: {} tokens ({})", counts.total, encoding);
            if counts.skipped > 0 {
                println!("Skipped {} unreadable file(s)", counts.skipped);
            }
        }

        return Ok(());
    }

    let count = if let Some(file) = &args.file {
        count_file(file, &selector)?
    } else if let Some(text) = &args.text {
        count_str(text, &selector)?
    } else {
        anyhow::bail!("Provide TEXT, --file, or --dir");
    };

    if args.json {
        let out = serde_json::json!({
            "encoding": encoding.as_str(),
            "tokens": count,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", count);
    }

    Ok(())
}
