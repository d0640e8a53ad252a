pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliCommand, CliConfig};

pub use crate::adapters::LocalStorage;
pub use crate::config::toml_config::BatchConfig;
pub use crate::core::batch_pipeline::BatchPipeline;
pub use crate::core::checksum::Direction;
pub use crate::core::dispatcher::{
    validate_israeli_bank_account, validate_json, validate_text, AccountValidator,
};
pub use crate::core::engine::{BatchEngine, BatchOutcome};
pub use crate::core::registry::{default_registry, BankRule, BankRuleRegistry, RuleFn};
pub use crate::domain::model::{BankAccountIdentifier, BatchReport, BatchSummary, Verdict};
pub use crate::utils::error::{BankValidatorError, Result};
