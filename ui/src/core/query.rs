//! Pure queries over the immutable dataset. Every view in the dashboard is
//! a composition of these.

use super::dataset::{Dataset, Record, Year};
use super::error::QueryError;

/// Row cap shared by the table, pie, and export views.
pub const TOP_N: usize = 10;

/// All records whose continent matches. Errors when the continent was never
/// observed in the dataset.
pub fn filter_by_continent<'a>(
    dataset: &'a Dataset,
    continent: &str,
) -> Result<Vec<&'a Record>, QueryError> {
    if !dataset.continents().iter().any(|known| known == continent) {
        return Err(QueryError::UnknownContinent(continent.to_string()));
    }
    Ok(dataset
        .records()
        .iter()
        .filter(|record| record.continent == continent)
        .collect())
}

/// Descending sort by the year's servings, truncated to `n`. The sort is
/// stable, so ties keep dataset order.
pub fn top_n<'a>(records: &[&'a Record], year: Year, n: usize) -> Vec<&'a Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.servings(year).total_cmp(&a.servings(year)));
    sorted.truncate(n);
    sorted
}

/// Exact-match country lookup.
pub fn by_country<'a>(dataset: &'a Dataset, country: &str) -> Result<&'a Record, QueryError> {
    dataset
        .records()
        .iter()
        .find(|record| record.country_region == country)
        .ok_or_else(|| QueryError::UnknownCountry(country.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_csv(
            "Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population\n\
             China,Asia,100,110,120,130,140,1412000000\n\
             USA,Americas,10,11,12,13,14,331000000\n\
             Japan,Asia,50,50,50,50,14,125000000\n\
             Vietnam,Asia,30,35,40,45,50,98000000\n",
        )
        .unwrap()
    }

    #[test]
    fn filter_returns_only_matching_continent() {
        let dataset = sample();
        let asia = filter_by_continent(&dataset, "Asia").unwrap();
        assert_eq!(asia.len(), 3);
        assert!(asia.iter().all(|record| record.continent == "Asia"));
    }

    #[test]
    fn filter_rejects_unknown_continent() {
        let dataset = sample();
        assert_eq!(
            filter_by_continent(&dataset, "Europe").unwrap_err(),
            QueryError::UnknownContinent("Europe".to_string())
        );
    }

    #[test]
    fn top_n_sorts_descending_and_truncates() {
        let dataset = sample();
        let all: Vec<&Record> = dataset.records().iter().collect();
        let top = top_n(&all, Year::Y2022, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].country_region, "China");
        assert_eq!(top[1].country_region, "Vietnam");

        let full = top_n(&all, Year::Y2022, 10);
        assert_eq!(full.len(), 4);
        for pair in full.windows(2) {
            assert!(pair[0].servings(Year::Y2022) >= pair[1].servings(Year::Y2022));
        }
    }

    #[test]
    fn top_n_breaks_ties_by_dataset_order() {
        // USA and Japan both have 14 in 2022; USA appears first in the file.
        let dataset = sample();
        let all: Vec<&Record> = dataset.records().iter().collect();
        let top = top_n(&all, Year::Y2022, 10);
        let usa = top.iter().position(|r| r.country_region == "USA").unwrap();
        let japan = top.iter().position(|r| r.country_region == "Japan").unwrap();
        assert!(usa < japan);
    }

    #[test]
    fn by_country_finds_exactly_one_record() {
        let dataset = sample();
        let record = by_country(&dataset, "Japan").unwrap();
        assert_eq!(record.continent, "Asia");
        assert_eq!(
            by_country(&dataset, "Wakanda").unwrap_err(),
            QueryError::UnknownCountry("Wakanda".to_string())
        );
    }
}
