use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use docx_wordlist::{Config, OutputFormat, convert_document};

#[derive(Parser, Debug)]
#[command(name = "docx-wordlist")]
#[command(about = "Extract English-Chinese vocabulary pairs from .docx tables into a word list")]
#[command(version)]
struct Cli {
    /// Input Word document (default: vocabulary.docx)
    input: Option<PathBuf>,

    /// Output word list (default: wordlist.txt)
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Read defaults from this config file instead of the user config directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if cli.init_config {
        let path = Config::init_default(cli.config.as_deref())?;
        println!("Default config written to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load(),
    };

    let input = cli.input.unwrap_or(config.input);
    let output = cli.output.unwrap_or(config.output);
    let format = cli.format.unwrap_or(config.format);

    let summary = match convert_document(&input, &output, format) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Conversion failed: {e}");
            return Err(e.into());
        }
    };

    println!("Conversion complete: {}", summary.output_path.display());
    println!("Converted {} word pairs", summary.pair_count);
    if summary.duplicates_removed() > 0 {
        log::info!("Removed {} duplicate pairs", summary.duplicates_removed());
    }

    Ok(())
}
