use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};

use crate::delay;
use crate::extractor::SalaryRecord;
use crate::scraper::SalaryScraper;

pub const CSV_HEADER: [&str; 8] = [
    "Title",
    "Location",
    "Description",
    "nTile10",
    "nTile25",
    "nTile50",
    "nTile75",
    "nTile90",
];

/// Drive the per-city loop. Cities whose fetch produces nothing are
/// skipped without a placeholder row; the pause runs between successive
/// attempts, not after the last one.
///
/// The fetch step is a closure so tests can exercise the loop without a
/// network.
pub fn collect_salaries<F>(cities: &[String], mut fetch: F, pause: Duration) -> Vec<SalaryRecord>
where
    F: FnMut(&str) -> Option<SalaryRecord>,
{
    let total = cities.len();
    let mut records = Vec::new();

    for (i, city) in cities.iter().enumerate() {
        match fetch(city) {
            Some(record) => {
                records.push(record);
                info!("Processed {} ({} / {})", city, i + 1, total);
            }
            None => warn!("Skipped {} ({} / {})", city, i + 1, total),
        }

        if i + 1 < total {
            delay::between_requests(pause);
        }
    }

    records
}

/// Serialize records with the fixed header row, preserving order. The
/// header is written even when there are no records.
pub fn write_csv<W: Write>(records: &[SalaryRecord], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_to_csv<P: AsRef<Path>>(records: &[SalaryRecord], path: P) -> Result<(), Box<dyn Error>> {
    let file = File::create(path.as_ref())?;
    write_csv(records, file)?;
    info!("Wrote {} records to {:?}", records.len(), path.as_ref());
    Ok(())
}

/// Full batch: fetch every city in order, then persist. Returns the
/// collected records so callers can inspect them without re-reading the
/// file. Only the output write can fail.
pub fn run(
    scraper: &SalaryScraper,
    job_title: &str,
    cities: &[String],
    output: &Path,
) -> Result<Vec<SalaryRecord>, Box<dyn Error>> {
    let pause = scraper.config().request_delay;
    let records = collect_salaries(
        cities,
        |city| scraper.extract_salary_info(job_title, city),
        pause,
    );
    save_to_csv(&records, output)?;
    Ok(records)
}
