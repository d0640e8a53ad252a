pub mod batch_pipeline;
pub mod checksum;
pub mod dispatcher;
pub mod engine;
pub mod registry;
pub mod rules;

pub use crate::domain::model::{AccountRow, BatchReport};
pub use crate::domain::ports::{BatchSettings, Pipeline, Storage};
pub use crate::utils::error::Result;
