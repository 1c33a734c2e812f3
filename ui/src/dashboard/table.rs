use dioxus::prelude::*;

use crate::{
    core::{format, views::TopTable},
    dashboard::selection_meta,
};

#[component]
pub fn TopTablePanel(table: TopTable) -> Element {
    let meta = selection_meta(&table.continent, table.year);
    let year_header = format!("{} servings", table.year);

    rsx! {
        section { class: "dashboard-card dashboard-table",
            div { class: "dashboard-card__header",
                h2 { "Top consumers in {table.continent}" }
                span { class: "dashboard-card__meta", "{meta}" }
            }

            if table.rows.is_empty() {
                p { class: "dashboard-card__placeholder",
                    "No countries recorded for this continent."
                }
            } else {
                table { class: "dashboard-table__grid",
                    thead {
                        tr {
                            th { "Country/Region" }
                            th { class: "dashboard-table__num", "{year_header}" }
                            th { class: "dashboard-table__num", "2022 population" }
                        }
                    }
                    tbody {
                        for row in table.rows.iter() {
                            {
                                let servings = format::format_servings(row.servings);
                                let population = format::format_population(row.population_2022);
                                rsx! {
                                    tr {
                                        td { "{row.country_region}" }
                                        td { class: "dashboard-table__num", "{servings}" }
                                        td { class: "dashboard-table__num", "{population}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
