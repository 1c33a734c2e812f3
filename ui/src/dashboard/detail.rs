use dioxus::prelude::*;

use crate::core::{format, views::CountryDetail};

#[component]
pub fn CountryDetailPanel(detail: CountryDetail) -> Element {
    let population = format::format_population(detail.population_2022);

    rsx! {
        section { class: "dashboard-card dashboard-detail",
            div { class: "dashboard-card__header",
                h2 { "Consumption data for {detail.country_region}" }
                span { class: "dashboard-card__meta",
                    "{detail.continent} · {population} people"
                }
            }

            ul { class: "dashboard-detail__grid",
                for (year, servings) in detail.servings_by_year.iter() {
                    {
                        let value = format::format_servings(*servings);
                        rsx! {
                            li {
                                span { class: "dashboard-detail__metric-label", "{year}" }
                                span { class: "dashboard-detail__metric-value", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
