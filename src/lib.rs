pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::AppConfig;
pub use crate::core::{
    area::AreaCalculator, captain::Captain, reminder::PasswordReminder, reporter::SalesReporter,
};
pub use crate::utils::error::{Result, SolidError};
