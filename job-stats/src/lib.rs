pub mod error;
pub mod fetch;
pub mod hh;
pub mod report;
pub(crate) mod salary;
pub mod stats;
pub mod superjob;

pub use error::{Error, Result};
pub use fetch::RetryPolicy;
pub use stats::{JobsReport, LanguageStats};
