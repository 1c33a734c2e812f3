//! Pure view assembly: one selection in, six payloads out.
//!
//! `assemble` recomputes everything from the full dataset on each call. No
//! payload depends on another, and nothing here touches the UI layer, so
//! the whole render path stays testable without a browser.

use super::dataset::{Dataset, Year};
use super::error::QueryError;
use super::query;
use super::selection::Selection;

/// One row of the top-N table: the three projected columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TopRow {
    pub country_region: String,
    pub servings: f64,
    pub population_2022: u64,
}

/// Top consumers within the selected continent for the selected year.
#[derive(Debug, Clone, PartialEq)]
pub struct TopTable {
    pub continent: String,
    pub year: Year,
    pub rows: Vec<TopRow>,
}

/// One line of the trend chart: a year's servings across the continent's
/// countries, aligned with [`TrendSeries::countries`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    pub year: Year,
    pub values: Vec<f64>,
}

/// Consumption trend for the continent subset: x axis is the country list,
/// one line per survey year.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub continent: String,
    pub countries: Vec<String>,
    pub lines: Vec<TrendLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerCapitaBar {
    pub country_region: String,
    pub value: f64,
}

/// Per-capita servings for the continent subset in the selected year.
/// Records with a zero population are listed in `excluded` instead of being
/// plotted as an undefined value.
#[derive(Debug, Clone, PartialEq)]
pub struct PerCapitaSeries {
    pub continent: String,
    pub year: Year,
    pub bars: Vec<PerCapitaBar>,
    pub excluded: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub country_region: String,
    pub servings: f64,
}

/// Global top-10 consumers for the year, unfiltered by continent.
#[derive(Debug, Clone, PartialEq)]
pub struct PieBreakdown {
    pub year: Year,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub country_region: String,
    pub continent: String,
    pub population_2022: u64,
    pub servings: f64,
}

/// Population vs. consumption for every record, colored by continent.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub year: Year,
    pub points: Vec<ScatterPoint>,
}

/// All five yearly figures for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub country_region: String,
    pub continent: String,
    pub population_2022: u64,
    pub servings_by_year: Vec<(Year, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    pub top_table: TopTable,
    pub trend: TrendSeries,
    pub per_capita: PerCapitaSeries,
    pub pie: PieBreakdown,
    pub scatter: ScatterPlot,
    pub detail: CountryDetail,
}

/// Builds every view for the current selection.
pub fn assemble(dataset: &Dataset, selection: &Selection) -> Result<DashboardViews, QueryError> {
    let year = selection.year;
    let subset = query::filter_by_continent(dataset, &selection.continent)?;

    let top_table = TopTable {
        continent: selection.continent.clone(),
        year,
        rows: query::top_n(&subset, year, query::TOP_N)
            .into_iter()
            .map(|record| TopRow {
                country_region: record.country_region.clone(),
                servings: record.servings(year),
                population_2022: record.population_2022,
            })
            .collect(),
    };

    let trend = TrendSeries {
        continent: selection.continent.clone(),
        countries: subset
            .iter()
            .map(|record| record.country_region.clone())
            .collect(),
        lines: Year::ALL
            .into_iter()
            .map(|line_year| TrendLine {
                year: line_year,
                values: subset
                    .iter()
                    .map(|record| record.servings(line_year))
                    .collect(),
            })
            .collect(),
    };

    let mut bars = Vec::new();
    let mut excluded = Vec::new();
    for record in &subset {
        match record.per_capita(year) {
            Some(value) => bars.push(PerCapitaBar {
                country_region: record.country_region.clone(),
                value,
            }),
            None => excluded.push(record.country_region.clone()),
        }
    }
    let per_capita = PerCapitaSeries {
        continent: selection.continent.clone(),
        year,
        bars,
        excluded,
    };

    let everyone: Vec<_> = dataset.records().iter().collect();
    let pie = PieBreakdown {
        year,
        slices: query::top_n(&everyone, year, query::TOP_N)
            .into_iter()
            .map(|record| PieSlice {
                country_region: record.country_region.clone(),
                servings: record.servings(year),
            })
            .collect(),
    };

    let scatter = ScatterPlot {
        year,
        points: dataset
            .records()
            .iter()
            .map(|record| ScatterPoint {
                country_region: record.country_region.clone(),
                continent: record.continent.clone(),
                population_2022: record.population_2022,
                servings: record.servings(year),
            })
            .collect(),
    };

    let record = query::by_country(dataset, &selection.country)?;
    let detail = CountryDetail {
        country_region: record.country_region.clone(),
        continent: record.continent.clone(),
        population_2022: record.population_2022,
        servings_by_year: Year::ALL
            .into_iter()
            .map(|detail_year| (detail_year, record.servings(detail_year)))
            .collect(),
    };

    Ok(DashboardViews {
        top_table,
        trend,
        per_capita,
        pie,
        scatter,
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_csv(
            "Country/Region,Continent,2018,2019,2020,2021,2022,2022 Population\n\
             China,Asia,100,110,120,130,140,1412000000\n\
             USA,Americas,10,11,12,13,14,331000000\n\
             Atlantis,Asia,1,1,1,1,1,0\n",
        )
        .unwrap()
    }

    fn asia_2022(dataset: &Dataset) -> Selection {
        Selection {
            continent: "Asia".to_string(),
            year: Year::Y2022,
            country: dataset.records()[0].country_region.clone(),
        }
    }

    #[test]
    fn top_table_is_filtered_sorted_and_projected() {
        let dataset = sample();
        let views = assemble(&dataset, &asia_2022(&dataset)).unwrap();
        let table = &views.top_table;
        assert_eq!(table.continent, "Asia");
        assert!(table.rows.len() <= query::TOP_N);
        assert_eq!(table.rows[0].country_region, "China");
        assert_eq!(table.rows[0].servings, 140.0);
        assert_eq!(table.rows[0].population_2022, 1_412_000_000);
        for pair in table.rows.windows(2) {
            assert!(pair[0].servings >= pair[1].servings);
        }
    }

    #[test]
    fn trend_has_one_line_per_year_aligned_with_countries() {
        let dataset = sample();
        let views = assemble(&dataset, &asia_2022(&dataset)).unwrap();
        let trend = &views.trend;
        assert_eq!(trend.countries, ["China", "Atlantis"]);
        assert_eq!(trend.lines.len(), 5);
        for line in &trend.lines {
            assert_eq!(line.values.len(), trend.countries.len());
        }
        assert_eq!(trend.lines[0].year, Year::Y2018);
        assert_eq!(trend.lines[0].values[0], 100.0);
    }

    #[test]
    fn per_capita_excludes_zero_population_records() {
        let dataset = sample();
        let views = assemble(&dataset, &asia_2022(&dataset)).unwrap();
        let series = &views.per_capita;
        assert_eq!(series.bars.len(), 1);
        assert_eq!(series.bars[0].country_region, "China");
        assert!((series.bars[0].value - 0.0992).abs() < 1e-4);
        assert_eq!(series.excluded, ["Atlantis"]);
    }

    #[test]
    fn pie_is_global_regardless_of_continent_filter() {
        let dataset = sample();
        let views = assemble(&dataset, &asia_2022(&dataset)).unwrap();
        let slices = &views.pie.slices;
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].country_region, "China");
        assert_eq!(slices[1].country_region, "USA");
    }

    #[test]
    fn scatter_covers_every_record() {
        let dataset = sample();
        let views = assemble(&dataset, &asia_2022(&dataset)).unwrap();
        assert_eq!(views.scatter.points.len(), dataset.len());
        let usa = views
            .scatter
            .points
            .iter()
            .find(|point| point.country_region == "USA")
            .unwrap();
        assert_eq!(usa.continent, "Americas");
        assert_eq!(usa.servings, 14.0);
    }

    #[test]
    fn detail_projects_all_five_years() {
        let dataset = sample();
        let mut selection = asia_2022(&dataset);
        selection.country = "USA".to_string();
        let views = assemble(&dataset, &selection).unwrap();
        let detail = &views.detail;
        assert_eq!(detail.country_region, "USA");
        assert_eq!(detail.servings_by_year.len(), 5);
        assert_eq!(detail.servings_by_year[0], (Year::Y2018, 10.0));
        assert_eq!(detail.servings_by_year[4], (Year::Y2022, 14.0));
    }

    #[test]
    fn unknown_continent_is_an_error_not_a_panic() {
        let dataset = sample();
        let mut selection = asia_2022(&dataset);
        selection.continent = "Europe".to_string();
        assert_eq!(
            assemble(&dataset, &selection).unwrap_err(),
            QueryError::UnknownContinent("Europe".to_string())
        );
    }

    #[test]
    fn unknown_country_is_an_error_not_a_panic() {
        let dataset = sample();
        let mut selection = asia_2022(&dataset);
        selection.country = "Wakanda".to_string();
        assert_eq!(
            assemble(&dataset, &selection).unwrap_err(),
            QueryError::UnknownCountry("Wakanda".to_string())
        );
    }
}
