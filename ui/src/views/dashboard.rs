use dioxus::prelude::*;

use crate::{
    core::{dataset::Year, selection::Selection, views},
    dashboard::{
        CountryDetailPanel, DashboardState, ExportPanel, PerCapitaChart, PieChart, ScatterChart,
        TopTablePanel, TrendChart,
    },
};

#[component]
pub fn Dashboard() -> Element {
    let state = use_hook(DashboardState::load);

    // A missing dataset is fatal for the whole page: render the load error
    // instead of any view.
    let Some(dataset) = state.dataset else {
        let message = state
            .error
            .unwrap_or_else(|| "Dataset unavailable".to_string());
        return rsx! {
            section { class: "page page-dashboard",
                h1 { "World instant noodles dashboard" }
                div { class: "dashboard-card dashboard-card--error",
                    h2 { "Data unavailable" }
                    p { "{message}" }
                }
            }
        };
    };

    let initial = Selection::initial(dataset);
    let initial_continent = initial.continent.clone();
    let initial_country = initial.country.clone();
    let mut continent = use_signal(move || initial_continent);
    let mut year = use_signal(|| initial.year);
    let mut country = use_signal(move || initial_country);

    let selection = Selection {
        continent: continent(),
        year: year(),
        country: country(),
    };
    // Every view is recomputed from the full table on any selection change.
    let assembled = views::assemble(dataset, &selection);

    let continents = dataset.continents().to_vec();
    let countries: Vec<String> = dataset.countries().map(str::to_string).collect();
    let selected_continent = selection.continent.clone();
    let selected_country = selection.country.clone();
    let selected_year = selection.year;

    rsx! {
        section { class: "page page-dashboard",
            h1 { "World instant noodles dashboard (2018–2022)" }
            p {
                "Insights into world instant noodle consumption across countries and regions: "
                "trends, per-capita figures, the global top-10, and per-country detail."
            }

            div { class: "dashboard-filters",
                label { class: "dashboard-filters__field",
                    span { "Continent" }
                    select {
                        onchange: move |evt| continent.set(evt.value()),
                        for option_name in continents.iter() {
                            option {
                                value: "{option_name}",
                                selected: *option_name == selected_continent,
                                "{option_name}"
                            }
                        }
                    }
                }
                label { class: "dashboard-filters__field",
                    span { "Year" }
                    select {
                        onchange: move |evt| {
                            if let Some(parsed) = Year::from_label(&evt.value()) {
                                year.set(parsed);
                            }
                        },
                        for option_year in Year::ALL {
                            option {
                                value: "{option_year}",
                                selected: option_year == selected_year,
                                "{option_year}"
                            }
                        }
                    }
                }
                label { class: "dashboard-filters__field",
                    span { "Country detail" }
                    select {
                        onchange: move |evt| country.set(evt.value()),
                        for option_name in countries.iter() {
                            option {
                                value: "{option_name}",
                                selected: *option_name == selected_country,
                                "{option_name}"
                            }
                        }
                    }
                }
            }

            match assembled {
                Ok(views) => rsx! {
                    div { class: "dashboard__panels",
                        TopTablePanel { table: views.top_table.clone() }
                        ExportPanel { table: views.top_table }
                        TrendChart { series: views.trend }
                        PerCapitaChart { series: views.per_capita }
                        PieChart { pie: views.pie }
                        ScatterChart { plot: views.scatter }
                        CountryDetailPanel { detail: views.detail }
                    }
                },
                Err(err) => rsx! {
                    div { class: "dashboard-card dashboard-card--error",
                        h2 { "Invalid selection" }
                        p { "{err}" }
                    }
                },
            }

            section { class: "dashboard-insights",
                h2 { "Key insights" }
                ul {
                    li { "The top consumers are primarily in Asia, with China the largest market by far." }
                    li { "Most countries grew steadily, with a visible spike in 2020." }
                    li { "Per-capita figures tell a different story: smaller countries often lead once population is factored in." }
                }
            }
        }
    }
}
