use tiktally_core::{Encoding, Error, Model};
use tiktally_tokens::{count_dir, count_file, count_str, tokenize_file, tokenize_str};
use tiktally_tokens::{DirOptions, Selector, Tokenizer};

#[test]
fn test_count_lifecycle() {
    // Create a temporary file
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("prompt.txt");
    let text = "You are a helpful assistant.\nAnswer briefly.\n";
    std::fs::write(&file_path, text).unwrap();

    // Resolve by model name
    let selector = Selector::new().model("gpt-4o");

    // File tokenization matches string tokenization of its contents
    let from_file = tokenize_file(&file_path, &selector).unwrap();
    let from_str = tokenize_str(text, &selector).unwrap();
    assert_eq!(from_file, from_str);

    // Counts are the sequence lengths
    assert_eq!(count_file(&file_path, &selector).unwrap(), from_file.len());
    assert_eq!(count_str(text, &selector).unwrap(), from_str.len());
}

#[test]
fn test_every_model_resolves_and_loads() {
    for model in Model::ALL {
        let tokenizer = Tokenizer::for_model(model.as_str()).unwrap();
        assert_eq!(tokenizer.encoding(), model.encoding());
    }
}

#[test]
fn test_handle_reuse_across_calls() {
    let tokenizer = Tokenizer::load(Encoding::Cl100kBase).unwrap();
    let selector = Selector::new().tokenizer(&tokenizer);

    let a = count_str("first call", &selector).unwrap();
    let b = count_str("first call", &selector).unwrap();
    assert_eq!(a, b);

    // The same handle conflicts with a model on a different encoding
    let err = count_str("text", &Selector::new().model("gpt-4o").tokenizer(&tokenizer))
        .unwrap_err();
    assert!(matches!(err, Error::TokenizerMismatch { .. }));
}

#[test]
fn test_directory_count_matches_per_file_counts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("one.txt"), "alpha beta gamma").unwrap();
    std::fs::write(dir.path().join("two.txt"), "delta epsilon").unwrap();

    let selector = Selector::new().encoding("o200k_base");
    let counts = count_dir(dir.path(), &selector, &DirOptions::default()).unwrap();

    assert_eq!(counts.files.len(), 2);
    for file in &counts.files {
        assert_eq!(file.tokens, count_file(&file.path, &selector).unwrap());
    }
    let sum: usize = counts.files.iter().map(|f| f.tokens).sum();
    assert_eq!(counts.total, sum);
}
