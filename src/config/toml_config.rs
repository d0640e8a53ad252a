use crate::domain::ports::{BatchSettings, ColumnNames};
use crate::utils::error::{BankValidatorError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["json", "csv"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub batch: BatchSection,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub input_path: Option<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_true")]
    pub has_headers: bool,
    #[serde(default)]
    pub columns: ColumnsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnsConfig {
    #[serde(default = "default_bank_column")]
    pub bank: String,
    #[serde(default = "default_branch_column")]
    pub branch: String,
    #[serde(default = "default_account_column")]
    pub account: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    #[serde(default = "default_filename")]
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_true() -> bool {
    true
}

fn default_bank_column() -> String {
    "bank_code".to_string()
}

fn default_branch_column() -> String {
    "branch_code".to_string()
}

fn default_account_column() -> String {
    "account_number".to_string()
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["json".to_string()]
}

fn default_filename() -> String {
    "validation_report".to_string()
}

impl Default for BatchSection {
    fn default() -> Self {
        Self {
            input_path: None,
            delimiter: default_delimiter(),
            has_headers: true,
            columns: ColumnsConfig::default(),
        }
    }
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            bank: default_bank_column(),
            branch: default_branch_column(),
            account: default_account_column(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            formats: default_formats(),
            filename: default_filename(),
        }
    }
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BankValidatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BankValidatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ACCOUNTS_DIR})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BankValidatorError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let input_path = validation::validate_required_field("batch.input_path", &self.batch.input_path)?;
        validation::validate_path("batch.input_path", input_path)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_non_empty_string("output.filename", &self.output.filename)?;
        validation::validate_delimiter("batch.delimiter", &self.batch.delimiter)?;

        let columns = &self.batch.columns;
        validation::validate_non_empty_string("batch.columns.bank", &columns.bank)?;
        validation::validate_non_empty_string("batch.columns.branch", &columns.branch)?;
        validation::validate_non_empty_string("batch.columns.account", &columns.account)?;
        validation::validate_distinct(
            "batch.columns",
            &[columns.bank.as_str(), columns.branch.as_str(), columns.account.as_str()],
        )?;

        validation::validate_one_of("output.formats", &self.output.formats, &OUTPUT_FORMATS)?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.clone()) {
            validation::validate_one_of("logging.format", &[format], &LOG_FORMATS)?;
        }

        Ok(())
    }

    /// 是否輸出 debug 等級日誌
    pub fn verbose_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .is_some_and(|level| matches!(level.to_ascii_lowercase().as_str(), "debug" | "trace"))
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|format| format == "json")
    }
}

impl BatchSettings for BatchConfig {
    fn input_path(&self) -> &str {
        self.batch.input_path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn columns(&self) -> ColumnNames<'_> {
        ColumnNames {
            bank: &self.batch.columns.bank,
            branch: &self.batch.columns.branch,
            account: &self.batch.columns.account,
        }
    }

    fn delimiter(&self) -> u8 {
        // 已在 validate_config 檢查過長度
        self.batch.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    fn has_headers(&self) -> bool {
        self.batch.has_headers
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn report_filename(&self) -> &str {
        &self.output.filename
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
