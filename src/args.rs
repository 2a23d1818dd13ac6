use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use yield_content::Strategy;

#[derive(Parser, Debug)]
#[command(name = "yield-content")]
#[command(about = "Extracts structured content from batches of web pages")]
#[command(version)]
pub struct Args {
    /// URLs to process (alternatively, use --request-file)
    pub urls: Vec<String>,

    /// Keyword to match against page text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Acquisition strategy
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Static)]
    pub strategy: StrategyArg,

    /// JSON file holding a request body: {"urls": [...], "query": "..."}
    #[arg(long)]
    pub request_file: Option<PathBuf>,

    /// WebDriver endpoint for the rendered strategies
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Maximum number of URLs processed at once
    #[arg(short, long, default_value_t = 8)]
    pub concurrency: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Static,
    Rendered,
    Paginated,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Delimited,
}

/// Convert from CLI strategy argument to internal strategy
pub fn convert_strategy(arg: StrategyArg) -> Strategy {
    match arg {
        StrategyArg::Static => Strategy::Static,
        StrategyArg::Rendered => Strategy::Rendered,
        StrategyArg::Paginated => Strategy::Paginated,
    }
}
