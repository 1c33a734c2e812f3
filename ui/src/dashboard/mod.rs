mod table;
pub use table::TopTablePanel;

mod charts;
pub use charts::{PerCapitaChart, PieChart, ScatterChart, TrendChart};

mod detail;
pub use detail::CountryDetailPanel;

mod export;
pub use export::ExportPanel;

mod utils;
pub(crate) use utils::*;

use crate::core::dataset::Dataset;

/// Shared state for the dashboard: the loaded dataset or the load failure.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub dataset: Option<&'static Dataset>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn load() -> Self {
        match Dataset::embedded() {
            Ok(dataset) => Self {
                dataset: Some(dataset),
                error: None,
            },
            Err(err) => Self {
                dataset: None,
                error: Some(format!("Couldn't load the noodle dataset: {err}")),
            },
        }
    }
}
