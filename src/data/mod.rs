//! Data module - CSV loading, cleaning and reshaping

mod loader;
mod processor;
mod record;

pub use loader::{DataLoader, LoaderError, REQUIRED_COLUMNS, SEPARATOR};
pub use processor::{
    DataProcessor, JobFilter, OutlierPolicy, PlottedPoint, QuantileBounds, ALL_JOBS_LABEL,
    ALL_JOBS_VALUE,
};
pub use record::{BankRecord, Dimension, Outcome, Rgb, NEUTRAL_GRAY, ORANGE, STEELBLUE};

use std::path::Path;

/// Load a file and drop outliers, producing the dataset every view is cut from.
pub fn load_and_clean(
    file_path: &Path,
    policy: OutlierPolicy,
    bounds: QuantileBounds,
) -> Result<Vec<BankRecord>, LoaderError> {
    let records = DataLoader::load_records(file_path)?;
    Ok(DataProcessor::remove_outliers(records, policy, bounds))
}
