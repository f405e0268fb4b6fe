use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_core::{
    ConfigurationError, ContributionRates, CreditParameters, RateSchedule, ScheduleTables,
    TaxBracket,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Published base taxes are rounded to whole euros.
const BASE_TAX_TOLERANCE: Decimal = dec!(1);

/// Errors that can occur when loading a rate schedule from files.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bracket for tax year {found} does not match schedule tax year {expected}")]
    TaxYearMismatch { expected: i32, found: i32 },

    #[error("Invalid schedule: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

impl From<toml::de::Error> for ScheduleLoaderError {
    fn from(err: toml::de::Error) -> Self {
        ScheduleLoaderError::TomlParse(err.to_string())
    }
}

/// A single record from the state tax brackets CSV file.
///
/// - `tax_year`: The tax year (e.g., 2025)
/// - `threshold`: Lower bound of the bracket
/// - `base_tax`: Cumulative tax of the lower brackets at the threshold
/// - `rate`: Marginal rate in percent (e.g., 30.25)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub tax_year: i32,
    pub threshold: Decimal,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

impl From<&TaxBracketRecord> for TaxBracket {
    fn from(record: &TaxBracketRecord) -> Self {
        TaxBracket::new(record.threshold, record.base_tax, record.rate)
    }
}

/// Scalar parameters of a schedule, read from a TOML file.
///
/// ```toml
/// tax_year = 2025
/// annualization_multiplier = 12.5
/// yearly_income_ceiling = 12500000000
///
/// [contributions]
/// pension_under_53 = 7.15
/// # ...
///
/// [credit]
/// max_credit = 3225
/// # ...
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScheduleParameters {
    pub tax_year: i32,
    pub annualization_multiplier: Decimal,
    pub yearly_income_ceiling: Decimal,
    pub contributions: ContributionRates,
    pub credit: CreditParameters,
}

/// Loader for rate schedules from a TOML parameter file and a CSV bracket file.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse tax bracket records from a CSV reader.
    ///
    /// Records are returned in file order; ordering is checked when the
    /// schedule is loaded.
    pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<TaxBracketRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse schedule parameters from TOML text.
    pub fn parse_parameters(text: &str) -> Result<ScheduleParameters, ScheduleLoaderError> {
        Ok(toml::from_str(text)?)
    }

    /// Combine parameters and bracket records into a validated schedule.
    ///
    /// Every record must belong to the parameters' tax year. Brackets whose
    /// base tax disagrees with the lower brackets by more than one unit are
    /// logged as warnings but do not fail the load.
    pub fn load(
        parameters: ScheduleParameters,
        records: &[TaxBracketRecord],
    ) -> Result<RateSchedule, ScheduleLoaderError> {
        if let Some(record) = records.iter().find(|r| r.tax_year != parameters.tax_year) {
            return Err(ScheduleLoaderError::TaxYearMismatch {
                expected: parameters.tax_year,
                found: record.tax_year,
            });
        }

        let tables = ScheduleTables {
            tax_year: parameters.tax_year,
            annualization_multiplier: parameters.annualization_multiplier,
            yearly_income_ceiling: parameters.yearly_income_ceiling,
            brackets: records.iter().map(TaxBracket::from).collect(),
            contributions: parameters.contributions,
            credit: parameters.credit,
        };

        let schedule = RateSchedule::load(tables)?;

        for inconsistency in schedule.base_tax_inconsistencies(BASE_TAX_TOLERANCE) {
            warn!(
                tax_year = schedule.tax_year(),
                bracket = inconsistency.index,
                threshold = %inconsistency.threshold,
                declared = %inconsistency.declared,
                expected = %inconsistency.expected,
                "Bracket base tax does not match cumulative tax of lower brackets"
            );
        }

        debug!(
            tax_year = schedule.tax_year(),
            brackets = schedule.brackets().len(),
            "Loaded rate schedule"
        );

        Ok(schedule)
    }

    /// Read both files from disk and load the schedule.
    pub fn load_from_paths(
        parameters_path: &Path,
        brackets_path: &Path,
    ) -> Result<RateSchedule, ScheduleLoaderError> {
        let text = fs::read_to_string(parameters_path).map_err(|source| ScheduleLoaderError::Io {
            path: parameters_path.to_path_buf(),
            source,
        })?;
        let parameters = Self::parse_parameters(&text)?;

        let file = fs::File::open(brackets_path).map_err(|source| ScheduleLoaderError::Io {
            path: brackets_path.to_path_buf(),
            source,
        })?;
        let records = Self::parse_brackets(file)?;

        Self::load(parameters, &records)
    }
}
