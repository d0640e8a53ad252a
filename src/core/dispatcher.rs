use crate::core::checksum::is_digits;
use crate::core::registry::{default_registry, BankRuleRegistry};
use crate::domain::model::BankAccountIdentifier;
use crate::utils::error::{BankValidatorError, Result};

/// Resolves a bank's rule from a registry and applies it.
#[derive(Debug, Clone, Copy)]
pub struct AccountValidator<'r> {
    registry: &'r BankRuleRegistry,
}

impl<'r> AccountValidator<'r> {
    pub fn new(registry: &'r BankRuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r BankRuleRegistry {
        self.registry
    }

    /// Checks the account's check digits against the bank's rule.
    ///
    /// Only surrounding whitespace is stripped from `account_number`. Structural
    /// problems are errors; a failed checksum is `Ok(false)`. Any integer is a
    /// well-typed code: a bank code with no rule, negative ones included, is
    /// unsupported, and the bank's rule decides what a branch code means.
    pub fn validate(&self, bank_code: i64, branch_code: i64, account_number: &str) -> Result<bool> {
        let account = account_number.trim();
        if !is_digits(account) {
            return Err(BankValidatorError::NonDigitAccountNumber);
        }

        let Some(rule) = self.registry.lookup(bank_code) else {
            tracing::warn!(bank_code, "unsupported bank code");
            return Err(BankValidatorError::UnsupportedBankCode { code: bank_code });
        };

        let valid = rule.apply(branch_code, account);
        tracing::debug!(bank_code, branch_code, rule = rule.name, valid, "account checked");
        Ok(valid)
    }

    pub fn validate_identifier(&self, identifier: &BankAccountIdentifier) -> Result<bool> {
        self.validate(
            identifier.bank_code,
            identifier.branch_code,
            &identifier.account_number,
        )
    }
}

impl Default for AccountValidator<'static> {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

/// Validates an Israeli bank account against the MASAV check-digit rules.
///
/// # Errors
///
/// * [`BankValidatorError::NonDigitAccountNumber`] if the trimmed account number
///   is empty or contains anything but ASCII digits.
/// * [`BankValidatorError::UnsupportedBankCode`] if no rule is registered for `bank_code`.
pub fn validate_israeli_bank_account(bank_code: i64, branch_code: i64, account_number: &str) -> Result<bool> {
    AccountValidator::default().validate(bank_code, branch_code, account_number)
}

/// Same as [`validate_israeli_bank_account`] for loosely typed JSON input.
///
/// Returns [`BankValidatorError::InvalidInputType`] unless the codes are
/// integers and the account number is a string.
pub fn validate_json(
    bank_code: &serde_json::Value,
    branch_code: &serde_json::Value,
    account_number: &serde_json::Value,
) -> Result<bool> {
    let identifier = BankAccountIdentifier::from_json(bank_code, branch_code, account_number)?;
    AccountValidator::default().validate_identifier(&identifier)
}

/// Same as [`validate_israeli_bank_account`] for text input such as CLI arguments.
pub fn validate_text(bank_code: &str, branch_code: &str, account_number: &str) -> Result<bool> {
    let identifier = BankAccountIdentifier::from_text(bank_code, branch_code, account_number)?;
    AccountValidator::default().validate_identifier(&identifier)
}
