use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "World Instant Noodles Consumption" }
            p { "Explore how instant noodle consumption shifted between 2018 and 2022 across countries and regions." }

            ul { class: "page-home__features",
                li { "Top consumers per continent and year, with a one-click CSV export" }
                li { "Consumption trends, per-capita comparisons, and the global top-10 share" }
                li { "Population against consumption for every country, plus per-country detail" }
            }
            p { class: "page-home__cta", "Head to the dashboard and pick a continent to get started." }
        }
    }
}
