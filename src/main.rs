use clap::Parser;
use std::error::Error;
use yield_content::config::ExtractorConfig;
use yield_content::{Batch, BatchRequest, export};

mod args;
use args::{Args, OutputFormat, StrategyArg, convert_strategy};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // A bad request is rejected before any URL is processed
    let request = match build_request(&args) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Print WebDriver info message for the browser-backed strategies
    if matches!(args.strategy, StrategyArg::Rendered | StrategyArg::Paginated) {
        eprintln!("Note: rendered extraction requires a WebDriver server (e.g., ChromeDriver).");
        eprintln!(
            "Set WEBDRIVER_URL or --webdriver-url if not using the default http://localhost:4444"
        );
    }

    let mut config = ExtractorConfig {
        max_concurrency: args.concurrency,
        ..ExtractorConfig::default()
    };
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }

    ::log::info!("Processing {} URLs", request.urls.len());
    let start_time = std::time::Instant::now();

    let results = Batch::new(request)
        .with_strategy(convert_strategy(args.strategy))
        .with_config(config)
        .run()
        .await;

    ::log::info!(
        "Extraction complete - processed {} pages in {:.2} seconds",
        results.len(),
        start_time.elapsed().as_secs_f64()
    );

    match args.output {
        OutputFormat::Json => match export::to_json(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize results: {}", e);
                std::process::exit(1);
            }
        },
        OutputFormat::Delimited => println!("{}", export::to_delimited(&results)),
    }
}

/// Build the batch request from a file body or from positional URLs
fn build_request(args: &Args) -> Result<BatchRequest, Box<dyn Error>> {
    if let Some(path) = &args.request_file {
        let body = std::fs::read_to_string(path)?;
        Ok(BatchRequest::from_json(&body)?)
    } else {
        Ok(BatchRequest::new(args.urls.clone(), args.query.clone())?)
    }
}
