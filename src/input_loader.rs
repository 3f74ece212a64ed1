use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{error, info};

/// Load the city slug list from a CSV file.
///
/// The file may pack several slugs per row; rows are flattened into one
/// list preserving file order. An unreadable file logs an error and yields
/// an empty list, which callers treat as fatal.
pub fn load_cities<P: AsRef<Path>>(filename: P) -> Vec<String> {
    let path = filename.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            error!("Could not open city list {:?}: {}", path, e);
            return Vec::new();
        }
    };

    let cities = read_cities(file);
    info!("Loaded {} cities from {:?}", cities.len(), path);
    cities
}

pub fn read_cities<R: Read>(reader: R) -> Vec<String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut cities = Vec::new();
    for result in rdr.records() {
        match result {
            Ok(row) => {
                cities.extend(
                    row.iter()
                        .filter(|field| !field.is_empty())
                        .map(|field| field.to_string()),
                );
            }
            Err(e) => error!("Error parsing city list row: {}", e),
        }
    }
    cities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_multiple_slugs_per_row() {
        let input = "New-York-NY,Los-Angeles-CA,Chicago-IL\nHouston-TX,Phoenix-AZ\n";
        let cities = read_cities(input.as_bytes());
        assert_eq!(
            cities,
            vec![
                "New-York-NY",
                "Los-Angeles-CA",
                "Chicago-IL",
                "Houston-TX",
                "Phoenix-AZ"
            ]
        );
    }

    #[test]
    fn preserves_file_order_and_drops_blank_cells() {
        let input = "Dallas-TX,,San-Jose-CA\n , Orlando-FL \n";
        let cities = read_cities(input.as_bytes());
        assert_eq!(cities, vec!["Dallas-TX", "San-Jose-CA", "Orlando-FL"]);
    }

    #[test]
    fn missing_file_yields_empty_list() {
        assert!(load_cities("definitely_not_here.csv").is_empty());
    }
}
