use crate::domain::{
    errors::{AppResult, DataError, DataResult, InvalidRecord},
    logging::{LogComponent, get_logger},
    rates::{RateRecord, RateRepository},
};

/// Dataset bundled into the module, as written by the refresh scripts
pub const EMBEDDED_RATES: &str = include_str!("../../data/rates_data.json");

const SCRIPT_BINDING: &str = "baseRates";

/// Parse either a bare JSON array (`rates_data.json`) or the script form
/// (`// ...` comment header followed by `const baseRates = [...];`, i.e. `data.js`).
pub fn parse_rates_document(document: &str) -> DataResult<Vec<RateRecord>> {
    let body: String = document
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");
    let body = body.trim();

    let array = if body.starts_with('[') {
        body
    } else {
        let (binding, value) = body
            .split_once('=')
            .ok_or_else(|| DataError::Parse("expected a JSON array or a `const baseRates = [...]` script".to_string()))?;
        if !binding.contains(SCRIPT_BINDING) {
            return Err(DataError::Parse(format!("unexpected binding `{}`", binding.trim())));
        }
        value.trim().trim_end_matches(';').trim_end()
    };

    Ok(serde_json::from_str(array)?)
}

/// Check the data-contract invariants: non-empty country and flag, finite numbers.
pub fn validate_records(records: &[RateRecord]) -> DataResult<()> {
    for (index, record) in records.iter().enumerate() {
        let reason = if record.country.trim().is_empty() {
            Some(InvalidRecord::EmptyCountry)
        } else if record.flag.trim().is_empty() {
            Some(InvalidRecord::EmptyFlag)
        } else if !record.rate.value().is_finite() {
            Some(InvalidRecord::NonFiniteRate(record.rate.value()))
        } else if !record.change.value().is_finite() {
            Some(InvalidRecord::NonFiniteChange(record.change.value()))
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(DataError::Invalid { index, reason });
        }
    }
    Ok(())
}

/// Parse and validate in one step.
pub fn load_rates_document(document: &str) -> DataResult<Vec<RateRecord>> {
    let records = parse_rates_document(document)?;
    validate_records(&records)?;
    Ok(records)
}

/// Repository over the bundled dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRateRepository;

impl RateRepository for EmbeddedRateRepository {
    fn load_rates(&self) -> AppResult<Vec<RateRecord>> {
        let records = load_rates_document(EMBEDDED_RATES).inspect_err(|err| {
            get_logger().error(LogComponent::Infrastructure("DataSource"), &format!("❌ {}", err));
        })?;
        get_logger().debug(
            LogComponent::Infrastructure("DataSource"),
            &format!("Loaded {} embedded rate records", records.len()),
        );
        Ok(records)
    }
}

/// Repository over records the host already holds
#[derive(Debug, Clone, Default)]
pub struct StaticRateRepository {
    records: Vec<RateRecord>,
}

impl StaticRateRepository {
    pub fn new(records: Vec<RateRecord>) -> Self {
        Self { records }
    }

    /// Build from a JSON or `data.js` document supplied at runtime.
    pub fn from_document(document: &str) -> DataResult<Self> {
        load_rates_document(document).map(Self::new)
    }
}

impl RateRepository for StaticRateRepository {
    fn load_rates(&self) -> AppResult<Vec<RateRecord>> {
        validate_records(&self.records)?;
        Ok(self.records.clone())
    }
}
