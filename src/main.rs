use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use salary_scraper_lib::{aggregator, input_loader, logger};
use salary_scraper_lib::{SalaryScraper, ScrapeConfig};

/// Collect salary benchmark percentiles for one job title across US cities.
#[derive(Parser, Debug)]
#[command(name = "salary-scraper")]
struct Cli {
    /// Job title slug, e.g. devops-engineer-i or data-scientist-i
    #[arg(default_value = "devops-engineer-i")]
    job_title: String,

    /// CSV file of City-ST slugs; several per row allowed
    #[arg(long, default_value = "largest_cities.csv")]
    cities: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "salary-results.csv")]
    output: PathBuf,

    /// Pause between requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Fetch a single city slug instead of reading the city list
    #[arg(long)]
    city: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let cli = Cli::parse();

    let config = ScrapeConfig {
        request_delay: Duration::from_millis(cli.delay_ms),
        ..ScrapeConfig::default()
    };
    let scraper = SalaryScraper::new(config);

    let cities = match cli.city {
        Some(city) => vec![city],
        None => input_loader::load_cities(&cli.cities),
    };
    if cities.is_empty() {
        error!(
            "No cities found in {:?}. Expected a CSV of City-ST slugs, e.g. Orlando-FL.",
            cli.cities
        );
        return Ok(());
    }

    info!(
        "Collecting salary data for '{}' across {} cities",
        cli.job_title,
        cities.len()
    );

    let records = aggregator::run(&scraper, &cli.job_title, &cities, &cli.output)?;

    info!(
        "Done. {} of {} cities produced records; results in {:?}",
        records.len(),
        cities.len(),
        cli.output
    );
    Ok(())
}
