// cyrwords - build a Cyrillic word list from a PDF dictionary
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use cyrwords::{extract_file, Config, RunSummary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract unique Cyrillic words from a PDF dictionary")]
struct Args {
    /// PDF dictionary to read
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Word list to write, one word per line
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Config file (defaults to $CYRWORDS_CONFIG or ./cyrwords.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Drop words shorter than this many letters
    #[arg(long)]
    min_len: Option<usize>,
    /// Skip pages whose text cannot be extracted instead of failing
    #[arg(long)]
    skip_bad_pages: bool,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::discover()?,
        };
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(min_len) = self.min_len {
            config.min_word_len = min_len;
        }
        if self.skip_bad_pages {
            config.skip_unreadable_pages = true;
        }
        Ok(config)
    }
}

fn report(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(summary).context("serializing summary")?;
        println!("{}", line);
    } else {
        println!(
            "Extracted {} words to {}",
            summary.words_written,
            summary.output.display()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.resolve_config().context("loading configuration")?;
    log::debug!("Config:\n{}", config.to_toml());

    // Extraction failures are reported, not propagated: the exit status stays 0
    match extract_file(&config) {
        Ok(summary) => report(&summary, args.json)?,
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}
