//! CSV Data Loader Module
//! Reads the semicolon-delimited bank marketing file with Polars and coerces
//! it into typed records.

use super::record::{BankRecord, Dimension};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Field separator of the bank marketing export.
pub const SEPARATOR: u8 = b';';

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "age", "balance", "duration", "campaign", "previous", "pdays", "job", "y",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Data file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load and coerce every row of a delimited file.
    ///
    /// All columns are read as text first; the six tracked columns are then
    /// coerced with [`DataLoader::coerce_number`].
    pub fn load_records(file_path: &Path) -> Result<Vec<BankRecord>, LoaderError> {
        if !file_path.exists() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_separator(SEPARATOR)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        let records = Self::records_from_frame(&df)?;
        log::info!(
            "Loaded {} rows from {}",
            records.len(),
            file_path.display()
        );

        let malformed = records.iter().filter(|r| r.has_missing_values()).count();
        if malformed > 0 {
            log::warn!("{} rows have non-numeric values in tracked columns", malformed);
        }

        Ok(records)
    }

    /// Convert a text-typed DataFrame into records.
    pub fn records_from_frame(df: &DataFrame) -> Result<Vec<BankRecord>, LoaderError> {
        for name in REQUIRED_COLUMNS {
            if df.get_column_index(name).is_none() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        let age = Self::numeric_column(df, Dimension::Age)?;
        let balance = Self::numeric_column(df, Dimension::Balance)?;
        let duration = Self::numeric_column(df, Dimension::Duration)?;
        let campaign = Self::numeric_column(df, Dimension::Campaign)?;
        let previous = Self::numeric_column(df, Dimension::Previous)?;
        let pdays = Self::numeric_column(df, Dimension::Pdays)?;
        let job = Self::text_column(df, "job")?;
        let y = Self::text_column(df, "y")?;

        let records = (0..df.height())
            .map(|i| {
                BankRecord::new(
                    age[i],
                    balance[i],
                    duration[i],
                    campaign[i],
                    previous[i],
                    pdays[i],
                    job[i].clone(),
                    y[i].clone(),
                )
            })
            .collect();

        Ok(records)
    }

    fn numeric_column(df: &DataFrame, dimension: Dimension) -> Result<Vec<f64>, LoaderError> {
        let values = df
            .column(dimension.column())?
            .str()?
            .into_iter()
            .map(|v| Self::coerce_number(v.unwrap_or_default()))
            .collect();
        Ok(values)
    }

    /// Numeric value of a text field. Surrounding whitespace is ignored, an
    /// empty field counts as zero and unparseable text is NaN.
    pub fn coerce_number(text: &str) -> f64 {
        let text = text.trim();
        if text.is_empty() {
            return 0.0;
        }
        text.parse().unwrap_or(f64::NAN)
    }

    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>, LoaderError> {
        let values = df
            .column(name)?
            .str()?
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect();
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::{ORANGE, STEELBLUE};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "\"age\";\"job\";\"marital\";\"balance\";\"duration\";\"campaign\";\"pdays\";\"previous\";\"y\""
        )
        .unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn test_load_records() {
        let file = create_test_csv(&[
            "58;\"management\";\"married\";2143;261;1;-1;0;\"no\"",
            "44;\"technician\";\"single\";29;120;1;-1;0;\"yes\"",
        ]);

        let records = DataLoader::load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].age, 58.0);
        assert_eq!(records[0].balance, 2143.0);
        assert_eq!(records[0].job, "management");
        assert_eq!(records[0].pdays, -1.0);
        assert_eq!(records[0].color, ORANGE);

        assert_eq!(records[1].duration, 2.0);
        assert_eq!(records[1].color, STEELBLUE);
    }

    #[test]
    fn test_malformed_numbers_become_nan() {
        let file = create_test_csv(&["abc;\"admin.\";\"single\";10;60;1;-1;0;\"no\""]);

        let records = DataLoader::load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].age.is_nan());
        assert!(records[0].has_missing_values());
        assert_eq!(records[0].balance, 10.0);
    }

    #[test]
    fn test_empty_and_padded_numbers() {
        let file = create_test_csv(&["30;\"admin.\";\"single\";;120;1; 5 ;0;\"no\""]);

        let records = DataLoader::load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].balance, 0.0);
        assert_eq!(records[0].pdays, 5.0);
        assert!(!records[0].has_missing_values());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(DataLoader::coerce_number("42"), 42.0);
        assert_eq!(DataLoader::coerce_number(" -1 "), -1.0);
        assert_eq!(DataLoader::coerce_number(""), 0.0);
        assert_eq!(DataLoader::coerce_number("   "), 0.0);
        assert_eq!(DataLoader::coerce_number("2.5e2"), 250.0);
        assert!(DataLoader::coerce_number("n/a").is_nan());
    }

    #[test]
    fn test_missing_column_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "age;job;balance").unwrap();
        writeln!(file, "30;admin.;100").unwrap();

        let result = DataLoader::load_records(file.path());
        assert!(matches!(result, Err(LoaderError::MissingColumn(_))));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = DataLoader::load_records(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(LoaderError::NotFound(_))));
    }
}
