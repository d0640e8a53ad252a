use crate::core::dispatcher::AccountValidator;
use crate::core::{AccountRow, BatchReport, BatchSettings, Pipeline, Storage};
use crate::domain::model::{BankAccountIdentifier, BatchSummary, ValidatedRecord, Verdict};
use crate::utils::error::{BankValidatorError, Result};
use serde::Serialize;

pub struct BatchPipeline<S: Storage, C: BatchSettings> {
    storage: S,
    config: C,
    validator: AccountValidator<'static>,
}

impl<S: Storage, C: BatchSettings> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_validator(storage, config, AccountValidator::default())
    }

    pub fn with_validator(storage: S, config: C, validator: AccountValidator<'static>) -> Self {
        Self {
            storage,
            config,
            validator,
        }
    }

    fn parse_rows(&self, data: &[u8]) -> Result<Vec<AccountRow>> {
        let columns = self.config.columns();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter())
            .has_headers(self.config.has_headers())
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(data);

        // 沒有標題列時依序取前三欄
        let positions = if self.config.has_headers() {
            let headers = reader.byte_headers()?.clone();
            let find = |name: &str| {
                headers
                    .iter()
                    .position(|h| String::from_utf8_lossy(h).trim() == name)
            };
            [find(columns.bank), find(columns.branch), find(columns.account)]
        } else {
            [Some(0), Some(1), Some(2)]
        };

        if positions.iter().any(Option::is_none) {
            tracing::warn!(
                "⚠️ Missing column(s) in input header, expected '{}', '{}', '{}'",
                columns.bank,
                columns.branch,
                columns.account
            );
        }

        // 匯出檔常為 Windows-1255，只解碼需要的三欄
        let first_line = if self.config.has_headers() { 2 } else { 1 };
        let mut rows = Vec::new();
        for (index, record) in reader.byte_records().enumerate() {
            let record = record?;
            let cell = |position: Option<usize>| {
                position
                    .and_then(|p| record.get(p))
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                    .unwrap_or_default()
            };
            rows.push(AccountRow {
                line: index + first_line,
                bank: cell(positions[0]),
                branch: cell(positions[1]),
                account: cell(positions[2]),
            });
        }

        Ok(rows)
    }

    fn validate_row(&self, row: &AccountRow) -> Verdict {
        let result = BankAccountIdentifier::from_text(&row.bank, &row.branch, &row.account)
            .and_then(|identifier| self.validator.validate_identifier(&identifier));
        Verdict::from(result)
    }
}

#[derive(Serialize)]
struct CsvReportRow<'a> {
    line: usize,
    bank_code: &'a str,
    branch_code: &'a str,
    account_number: &'a str,
    verdict: &'a str,
    reason: &'a str,
}

fn render_csv(report: &BatchReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in &report.records {
        writer.serialize(CsvReportRow {
            line: record.line,
            bank_code: &record.bank_code,
            branch_code: &record.branch_code,
            account_number: &record.account_number,
            verdict: record.verdict.label(),
            reason: record.verdict.reason().unwrap_or_default(),
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()).into())
}

#[async_trait::async_trait]
impl<S: Storage, C: BatchSettings> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<AccountRow>> {
        tracing::debug!("Reading accounts from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        self.parse_rows(&data)
    }

    async fn transform(&self, rows: Vec<AccountRow>) -> Result<BatchReport> {
        let mut summary = BatchSummary::default();
        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            let verdict = self.validate_row(&row);
            summary.record(&verdict);
            if let Verdict::Rejected { reason } = &verdict {
                tracing::debug!("Line {} rejected: {}", row.line, reason);
            }
            records.push(ValidatedRecord {
                line: row.line,
                bank_code: row.bank,
                branch_code: row.branch,
                account_number: row.account,
                verdict,
            });
        }

        Ok(BatchReport {
            generated_at: chrono::Utc::now(),
            summary,
            records,
        })
    }

    async fn load(&self, report: BatchReport) -> Result<String> {
        let filename = self.config.report_filename();
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let (name, data) = match format.as_str() {
                "json" => (format!("{}.json", filename), serde_json::to_vec_pretty(&report)?),
                "csv" => (format!("{}.csv", filename), render_csv(&report)?),
                other => {
                    tracing::warn!("Skipping unknown output format: {}", other);
                    continue;
                }
            };
            tracing::debug!("Writing {} ({} bytes) to storage", name, data.len());
            self.storage.write_file(&name, &data).await?;
            written.push(name);
        }

        let Some(primary) = written.first() else {
            return Err(BankValidatorError::ConfigValidationError {
                field: "output.formats".to_string(),
                message: "No supported report format to write (expected json or csv)".to_string(),
            });
        };
        Ok(format!("{}/{}", self.config.output_path(), primary))
    }
}
