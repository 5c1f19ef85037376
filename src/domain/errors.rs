use std::fmt::{Display, Formatter, Result as FmtResult};

use wasm_bindgen::JsValue;

/// Errors raised at the edges of the board: loading data and mounting the page.
/// The board itself has no failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Data(DataError),
    Presentation(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// Document is neither a JSON array nor a `const baseRates = [...]` script
    Parse(String),
    Invalid { index: usize, reason: InvalidRecord },
}

/// Record-level violations of the data contract
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidRecord {
    EmptyCountry,
    EmptyFlag,
    NonFiniteRate(f64),
    NonFiniteChange(f64),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Data(err) => write!(f, "Data Error: {}", err),
            AppError::Presentation(msg) => write!(f, "Presentation Error: {}", msg),
        }
    }
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DataError::Parse(msg) => write!(f, "cannot parse rates document: {}", msg),
            DataError::Invalid { index, reason } => write!(f, "record #{} is invalid: {}", index, reason),
        }
    }
}

impl Display for InvalidRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InvalidRecord::EmptyCountry => write!(f, "country is empty"),
            InvalidRecord::EmptyFlag => write!(f, "flag is empty"),
            InvalidRecord::NonFiniteRate(value) => write!(f, "rate {} is not finite", value),
            InvalidRecord::NonFiniteChange(value) => write!(f, "change {} is not finite", value),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for DataError {}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Data(err)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type DataResult<T> = Result<T, DataError>;
pub type AppResult<T> = Result<T, AppError>;
