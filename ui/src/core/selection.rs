//! The `(continent, year, country)` tuple driving every view.

use super::dataset::{Dataset, Year};

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub continent: String,
    pub year: Year,
    pub country: String,
}

impl Selection {
    /// Starting point for a freshly loaded dataset: first continent, most
    /// recent survey year, first country.
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            continent: dataset.continents().first().cloned().unwrap_or_default(),
            year: Year::Y2022,
            country: dataset
                .records()
                .first()
                .map(|record| record.country_region.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_selection_uses_first_seen_values() {
        let dataset = Dataset::from_csv(
            "Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population\n\
             Japan,Asia,1,1,1,1,1,100\n\
             Brazil,Americas,2,2,2,2,2,200\n",
        )
        .unwrap();
        let selection = Selection::initial(&dataset);
        assert_eq!(selection.continent, "Asia");
        assert_eq!(selection.year, Year::Y2022);
        assert_eq!(selection.country, "Japan");
    }
}
