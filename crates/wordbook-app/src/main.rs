use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordbook_config::Config;
use wordbook_dictionary::{DictionaryLoader, ParserOptions, RecordParser};

pub mod render;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

use self::session::{Session, open_dictionary};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "wordbook")]
#[command(version)]
#[command(about = "Interactive lookups over a delimited text dictionary")]
struct Cli {
    /// Data file to load (prompted for when omitted)
    data_file: Option<PathBuf>,

    /// JSON config file; environment variables are used when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };

    // Logs go to stderr, stdout is the session
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let loader = DictionaryLoader::new(RecordParser::new(ParserOptions::from(
        &config.dictionary,
    )));

    let initial = cli
        .data_file
        .or_else(|| config.dictionary.data_path.clone().map(PathBuf::from));

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let Some(dictionary) = open_dictionary(&loader, initial, &mut input, &mut output)? else {
        tracing::info!("Input closed before a data file was loaded");
        return Ok(());
    };

    let state = AppState::new(config, dictionary);
    Session::new(&state, input, output).run()?;

    Ok(())
}
