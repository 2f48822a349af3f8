use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "tiktally")]
#[command(about = "Token counting for LLM prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count tokens in text, a file, or a directory
    Count(CountArgs),

    /// Tokenize text or a file into token ids
    Tokenize(TokenizeArgs),

    /// List known models and their encodings
    Models,

    /// List known encodings
    Encodings,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args)]
pub struct CountArgs {
    /// Text to count (omit when using --file or --dir)
    pub text: Option<String>,

    /// Count a file instead of inline text
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Count every text file under a directory
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub dir: Option<PathBuf>,

    /// For --dir: recurse into subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// For --dir: glob patterns to exclude (adds to the configured set)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// For --dir: maximum number of files
    #[arg(long)]
    pub max_files: Option<usize>,

    #[command(flatten)]
    pub selector: SelectorArgs,

    /// Emit JSON instead of plain output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TokenizeArgs {
    /// Text to tokenize (omit when using --file)
    pub text: Option<String>,

    /// Tokenize a file instead of inline text
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub selector: SelectorArgs,

    /// Emit JSON instead of plain output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SelectorArgs {
    /// Model whose encoding should be used (default from config: gpt-4o)
    #[arg(long)]
    pub model: Option<String>,

    /// Encoding to use (must match --model when both are given)
    #[arg(long)]
    pub encoding: Option<String>,
}
