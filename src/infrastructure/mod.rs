pub mod data_source;
pub mod services;

pub use data_source::{EmbeddedRateRepository, StaticRateRepository};
pub use services::{BrowserTimeProvider, ConsoleLogger};
