pub mod errors;
pub mod logging;
pub mod rates;
pub mod state;
