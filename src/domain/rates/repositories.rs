use crate::domain::errors::AppResult;
use crate::domain::rates::RateRecord;

/// Source of the base record list handed to the board at startup
pub trait RateRepository {
    fn load_rates(&self) -> AppResult<Vec<RateRecord>>;
}
