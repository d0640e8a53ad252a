use crate::utils::error::{BankValidatorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A (bank, branch, account) triple as supplied by a caller.
///
/// The account number is kept exactly as given; trimming and the digit check
/// happen in the dispatcher so every entry point shares one normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountIdentifier {
    pub bank_code: i64,
    pub branch_code: i64,
    pub account_number: String,
}

impl BankAccountIdentifier {
    pub fn new(bank_code: i64, branch_code: i64, account_number: impl Into<String>) -> Self {
        Self {
            bank_code,
            branch_code,
            account_number: account_number.into(),
        }
    }

    /// Builds an identifier from untyped text such as CLI arguments or CSV cells.
    ///
    /// Codes must be plain integers, optionally negative; anything else
    /// (fractions, a leading `+`, values wider than `i64`) is a type violation.
    pub fn from_text(bank_code: &str, branch_code: &str, account_number: &str) -> Result<Self> {
        Ok(Self {
            bank_code: parse_code(bank_code)?,
            branch_code: parse_code(branch_code)?,
            account_number: account_number.to_string(),
        })
    }

    /// Builds an identifier from JSON values: two integers and a string.
    pub fn from_json(
        bank_code: &serde_json::Value,
        branch_code: &serde_json::Value,
        account_number: &serde_json::Value,
    ) -> Result<Self> {
        let code = |value: &serde_json::Value| value.as_i64().ok_or(BankValidatorError::InvalidInputType);

        let account_number = account_number
            .as_str()
            .ok_or(BankValidatorError::InvalidInputType)?;

        Ok(Self {
            bank_code: code(bank_code)?,
            branch_code: code(branch_code)?,
            account_number: account_number.to_string(),
        })
    }
}

fn parse_code(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    // i64::from_str accepts a leading '+', which is not a plain integer here
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BankValidatorError::InvalidInputType);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| BankValidatorError::InvalidInputType)
}

/// One raw CSV row before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRow {
    pub line: usize,
    pub bank: String,
    pub branch: String,
    pub account: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    Invalid,
    Rejected { reason: String },
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Valid => "valid",
            Verdict::Invalid => "invalid",
            Verdict::Rejected { .. } => "rejected",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Rejected { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<Result<bool>> for Verdict {
    fn from(result: Result<bool>) -> Self {
        match result {
            Ok(true) => Verdict::Valid,
            Ok(false) => Verdict::Invalid,
            Err(e) => Verdict::Rejected {
                reason: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub line: usize,
    pub bank_code: String,
    pub branch_code: String,
    pub account_number: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Valid => self.valid += 1,
            Verdict::Invalid => self.invalid += 1,
            Verdict::Rejected { .. } => self.rejected += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub summary: BatchSummary,
    pub records: Vec<ValidatedRecord>,
}
