//! The consumption table: yearly records per country, loaded once per
//! process and shared read-only with every view.

use std::fmt;

use once_cell::sync::OnceCell;
use serde::Deserialize;

use super::error::DatasetError;

/// The dataset shipped with the crate, embedded so the web and desktop
/// shells behave identically.
pub const EMBEDDED_CSV: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/noodles.csv"
));

/// Column headers the loader refuses to start without.
const REQUIRED_COLUMNS: [&str; 8] = [
    "Country/Region",
    "Continent",
    "2018",
    "2019",
    "2020",
    "2021",
    "2022",
    "2022 Population",
];

/// The closed set of survey years. Selections use this enum rather than raw
/// strings so a typo can't silently select a missing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Year {
    Y2018,
    Y2019,
    Y2020,
    Y2021,
    Y2022,
}

impl Year {
    pub const ALL: [Year; 5] = [Year::Y2018, Year::Y2019, Year::Y2020, Year::Y2021, Year::Y2022];

    pub fn label(self) -> &'static str {
        match self {
            Year::Y2018 => "2018",
            Year::Y2019 => "2019",
            Year::Y2020 => "2020",
            Year::Y2021 => "2021",
            Year::Y2022 => "2022",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|year| year.label() == label)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One country's row: identity, continent, population, and the five yearly
/// consumption figures (millions of servings).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Country/Region")]
    pub country_region: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "2018")]
    pub servings_2018: f64,
    #[serde(rename = "2019")]
    pub servings_2019: f64,
    #[serde(rename = "2020")]
    pub servings_2020: f64,
    #[serde(rename = "2021")]
    pub servings_2021: f64,
    #[serde(rename = "2022")]
    pub servings_2022: f64,
    #[serde(rename = "2022 Population")]
    pub population_2022: u64,
}

impl Record {
    /// Consumption for one survey year, in millions of servings.
    pub fn servings(&self, year: Year) -> f64 {
        match year {
            Year::Y2018 => self.servings_2018,
            Year::Y2019 => self.servings_2019,
            Year::Y2020 => self.servings_2020,
            Year::Y2021 => self.servings_2021,
            Year::Y2022 => self.servings_2022,
        }
    }

    /// Servings per person for one year: `servings / population * 1_000_000`.
    /// Returns `None` when the population is zero so callers drop the row
    /// instead of plotting an infinity.
    pub fn per_capita(&self, year: Year) -> Option<f64> {
        if self.population_2022 == 0 {
            return None;
        }
        Some(self.servings(year) / self.population_2022 as f64 * 1_000_000.0)
    }
}

/// The full table, immutable after load. Row order is source order; the
/// continent list preserves first appearance so filter options stay stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    continents: Vec<String>,
}

impl Dataset {
    /// Parses and validates CSV text with the literal survey headers.
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|err| DatasetError::Unreadable(err.to_string()))?
            .clone();
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == required) {
                return Err(DatasetError::MissingColumn(required.to_string()));
            }
        }

        let mut records: Vec<Record> = Vec::new();
        let mut continents: Vec<String> = Vec::new();

        for (index, row) in reader.deserialize::<Record>().enumerate() {
            // Header occupies line 1.
            let line = index + 2;
            let record = row.map_err(|err| DatasetError::Malformed {
                row: line,
                message: err.to_string(),
            })?;

            validate_record(&record, line)?;

            if records
                .iter()
                .any(|existing| existing.country_region == record.country_region)
            {
                return Err(DatasetError::DuplicateCountry(record.country_region));
            }
            if !continents.contains(&record.continent) {
                continents.push(record.continent.clone());
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self {
            records,
            continents,
        })
    }

    /// Reads and parses a CSV file from disk.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| DatasetError::Unreadable(format!("{}: {err}", path.display())))?;
        Self::from_csv(&text)
    }

    /// The embedded dataset, parsed exactly once per process. Subsequent
    /// calls return the cached table (or the cached failure).
    pub fn embedded() -> Result<&'static Dataset, DatasetError> {
        static DATASET: OnceCell<Result<Dataset, DatasetError>> = OnceCell::new();
        DATASET
            .get_or_init(|| {
                let loaded = Dataset::from_csv(EMBEDDED_CSV);
                match &loaded {
                    Ok(dataset) => {
                        tracing::info!(rows = dataset.len(), "noodle dataset loaded")
                    }
                    Err(err) => tracing::error!(%err, "embedded dataset failed to load"),
                }
                loaded
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Continent values in first-seen order.
    pub fn continents(&self) -> &[String] {
        &self.continents
    }

    /// Country names in source order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.country_region.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(record: &Record, line: usize) -> Result<(), DatasetError> {
    if record.country_region.is_empty() {
        return Err(DatasetError::Malformed {
            row: line,
            message: "empty Country/Region".to_string(),
        });
    }
    if record.continent.is_empty() {
        return Err(DatasetError::Malformed {
            row: line,
            message: "empty Continent".to_string(),
        });
    }
    for year in Year::ALL {
        let servings = record.servings(year);
        if !servings.is_finite() || servings < 0.0 {
            return Err(DatasetError::Malformed {
                row: line,
                message: format!("{year} servings must be a non-negative number"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "\
Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population
China,Asia,100,110,120,130,140,1412000000
USA,Americas,10,11,12,13,14,331000000
";

    #[test]
    fn parses_a_well_formed_table() {
        let dataset = Dataset::from_csv(GOOD_CSV).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.continents(), ["Asia", "Americas"]);
        let china = &dataset.records()[0];
        assert_eq!(china.country_region, "China");
        assert_eq!(china.servings(Year::Y2022), 140.0);
        assert_eq!(china.population_2022, 1_412_000_000);
    }

    #[test]
    fn rejects_a_missing_required_column() {
        let csv = "\
Country/Region,Continent,2018,2019,2020,2021,2022
China,Asia,100,110,120,130,140
";
        let err = Dataset::from_csv(csv).unwrap_err();
        assert_eq!(
            err,
            DatasetError::MissingColumn("2022 Population".to_string())
        );
    }

    #[test]
    fn rejects_duplicate_country_keys() {
        let csv = "\
Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population
China,Asia,100,110,120,130,140,1412000000
China,Asia,1,2,3,4,5,1412000000
";
        let err = Dataset::from_csv(csv).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateCountry("China".to_string()));
    }

    #[test]
    fn rejects_negative_servings() {
        let csv = "\
Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population
China,Asia,100,-110,120,130,140,1412000000
";
        match Dataset::from_csv(csv).unwrap_err() {
            DatasetError::Malformed { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_population() {
        let csv = "\
Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population
China,Asia,100,110,120,130,140,lots
";
        assert!(matches!(
            Dataset::from_csv(csv).unwrap_err(),
            DatasetError::Malformed { .. }
        ));
    }

    #[test]
    fn rejects_an_empty_table() {
        let csv = "Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population\n";
        assert_eq!(Dataset::from_csv(csv).unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn accepts_zero_population_but_per_capita_is_undefined() {
        let csv = "\
Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population
Atlantis,Oceania,1,2,3,4,5,0
";
        let dataset = Dataset::from_csv(csv).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.per_capita(Year::Y2022), None);
    }

    #[test]
    fn per_capita_matches_the_formula() {
        let dataset = Dataset::from_csv(GOOD_CSV).unwrap();
        let china = &dataset.records()[0];
        let value = china.per_capita(Year::Y2022).unwrap();
        assert!((value - 140.0 / 1_412_000_000.0 * 1_000_000.0).abs() < 1e-9);
        assert!((value - 0.0992).abs() < 1e-4);
    }

    #[test]
    fn year_labels_round_trip() {
        for year in Year::ALL {
            assert_eq!(Year::from_label(year.label()), Some(year));
        }
        assert_eq!(Year::from_label("2017"), None);
    }

    #[test]
    fn embedded_dataset_is_loadable() {
        let dataset = Dataset::embedded().unwrap();
        assert!(!dataset.is_empty());
    }
}
