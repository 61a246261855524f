//! # mdAL Highlighter CLI
//!
//! Scans an mdAL source file against the token pattern table and prints the
//! classified tokens, either as aligned text or as JSON.
use clap::Parser;
use log::info;
use mdal_highlight::Highlighter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mdal-highlight",
    version,
    about = "Token classification for mdAL source files"
)]
struct Cli {
    /// mdAL source file to scan
    input: PathBuf,

    /// Emit tokens as JSON instead of aligned text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let source = std::fs::read_to_string(&cli.input)?;
    info!("scanning {} ({} bytes)", cli.input.display(), source.len());

    let mut highlighter = Highlighter::new();
    let tokens = highlighter.highlight(&source);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!(
                "{:>10}  {:<12} {}",
                token.span.to_string(),
                token.value.category.as_str(),
                token.value.text
            );
        }

        let metrics = highlighter.metrics();
        eprintln!(
            "{} tokens ({} comment, {} keyword, {} variable, {} punctuation)",
            metrics.total_tokens(),
            metrics.comment_tokens,
            metrics.keyword_tokens,
            metrics.variable_tokens,
            metrics.punctuation_tokens
        );
    }

    Ok(())
}
