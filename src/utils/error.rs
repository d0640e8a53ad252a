use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankValidatorError {
    #[error("Invalid input types. Expected (int, int, str).")]
    InvalidInputType,

    #[error("Account number must contain only digits.")]
    NonDigitAccountNumber,

    #[error("Bank with code '{code}' is not supported or does not exist.")]
    UnsupportedBankCode { code: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BankValidatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInputType | Self::NonDigitAccountNumber | Self::UnsupportedBankCode { .. } => {
                ErrorCategory::Input
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// True for the three classified caller errors a single validation can raise.
    pub fn is_input_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInputType => {
                "Pass the bank and branch codes as whole non-negative numbers and the account number as text".to_string()
            }
            Self::NonDigitAccountNumber => {
                "Remove dashes, spaces and letters from the account number".to_string()
            }
            Self::UnsupportedBankCode { .. } => {
                "Run the `banks` command to list the supported bank codes".to_string()
            }
            Self::IoError(_) => "Check that the file exists and that you have permission to access it".to_string(),
            Self::CsvError(_) => "Check the CSV delimiter, header row and column names".to_string(),
            Self::SerializationError(_) => "Check the output directory and report contents".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Data => format!("Could not process data: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BankValidatorError>;
