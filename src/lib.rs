pub mod config;
pub mod converter;
pub mod error;
pub mod exchange_rate;
pub mod interrupt;
pub mod loader;
pub mod rate_file;
pub mod rate_store;
pub mod shell;

pub use converter::Converter;
pub use error::{LoadError, RateError, Result};
pub use exchange_rate::ExchangeRate;
pub use interrupt::{Interrupt, InterruptTrigger};
pub use loader::{LoadOutcome, RateLoader};
pub use rate_store::RateStore;
