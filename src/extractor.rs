use log::warn;
use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// One row of the output table: the base-salary percentile estimates for a
/// job title in one location. Serde renames keep the CSV header aligned
/// with the published column set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "nTile10")]
    pub p10: f64,
    #[serde(rename = "nTile25")]
    pub p25: f64,
    #[serde(rename = "nTile50")]
    pub p50: f64,
    #[serde(rename = "nTile75")]
    pub p75: f64,
    #[serde(rename = "nTile90")]
    pub p90: f64,
}

// Shape of the embedded ld+json "Occupation" block. Only the fields we
// read are modeled; everything else in the block is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Occupation {
    name: String,
    description: String,
    occupation_location: Vec<OccupationLocation>,
    estimated_salary: Vec<EstimatedSalary>,
}

#[derive(Debug, Deserialize)]
struct OccupationLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EstimatedSalary {
    percentile10: f64,
    percentile25: f64,
    median: f64,
    percentile75: f64,
    percentile90: f64,
}

pub struct Extractor {
    ld_json_selector: Selector,
    occupation_pattern: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            ld_json_selector: Selector::parse(r#"script[type="application/ld+json"]"#).unwrap(),
            // Benchmark pages carry several ld+json blocks (Organization
            // metadata among them). The one we want declares itself an
            // Occupation entity.
            occupation_pattern: Regex::new(r#""@type"\s*:\s*"Occupation""#).unwrap(),
        }
    }

    /// Pull a salary record out of a benchmark page. Returns None on any
    /// missing block, malformed JSON, or absent key so batch runs can skip
    /// the city and move on.
    pub fn extract(&self, html: &str) -> Option<SalaryRecord> {
        let document = Html::parse_document(html);

        let raw = match document
            .select(&self.ld_json_selector)
            .map(|script| script.text().collect::<String>())
            .find(|content| self.occupation_pattern.is_match(content))
        {
            Some(raw) => raw,
            None => {
                warn!("Page has no occupation data block");
                return None;
            }
        };

        let occupation: Occupation = match serde_json::from_str(raw.trim()) {
            Ok(data) => data,
            Err(e) => {
                warn!("Malformed occupation data block: {}", e);
                return None;
            }
        };

        let location = match occupation.occupation_location.into_iter().next() {
            Some(loc) => loc.name,
            None => {
                warn!("Occupation block has no location entry");
                return None;
            }
        };

        // First estimatedSalary entry is the base salary; later entries
        // cover total compensation.
        let salary = match occupation.estimated_salary.into_iter().next() {
            Some(estimate) => estimate,
            None => {
                warn!("Occupation block has no salary estimate");
                return None;
            }
        };

        Some(SalaryRecord {
            title: occupation.name,
            location,
            description: occupation.description,
            p10: salary.percentile10,
            p25: salary.percentile25,
            p50: salary.median,
            p75: salary.percentile75,
            p90: salary.percentile90,
        })
    }
}
