use crate::domain::model::{AccountRow, BatchReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Column names used to pick the identifier fields out of a CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames<'a> {
    pub bank: &'a str,
    pub branch: &'a str,
    pub account: &'a str,
}

pub trait BatchSettings: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn columns(&self) -> ColumnNames<'_>;
    fn delimiter(&self) -> u8;
    fn has_headers(&self) -> bool;
    fn output_formats(&self) -> &[String];
    fn report_filename(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<AccountRow>>;
    async fn transform(&self, rows: Vec<AccountRow>) -> Result<BatchReport>;
    async fn load(&self, report: BatchReport) -> Result<String>;
}
