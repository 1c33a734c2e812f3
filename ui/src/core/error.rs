//! Error taxonomy for dataset loading and selection queries.

use thiserror::Error;

/// Failures while acquiring or validating the source table. All of these
/// are fatal for the session: no view renders without a dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("dataset unreadable: {0}")]
    Unreadable(String),

    #[error("missing required column `{0}`")]
    MissingColumn(String),

    #[error("row {row}: {message}")]
    Malformed { row: usize, message: String },

    #[error("duplicate country/region `{0}`")]
    DuplicateCountry(String),

    #[error("dataset has no rows")]
    Empty,
}

/// A selection value outside the domains observed in the dataset. These are
/// usage errors: the filter controls derive their options from the dataset,
/// so hitting one means a caller bypassed them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("unknown continent `{0}`")]
    UnknownContinent(String),

    #[error("no country/region named `{0}`")]
    UnknownCountry(String),
}
