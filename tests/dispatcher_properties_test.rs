use il_bank_validator::{
    default_registry, validate_israeli_bank_account, validate_json, AccountValidator,
    BankAccountIdentifier, BankValidatorError,
};
use serde_json::json;

fn digit_strings() -> Vec<String> {
    let mut accounts: Vec<String> = (1..=20).map(|len| "7".repeat(len)).collect();
    accounts.extend(["0", "00", "000000000", "123456789012345678901234567890"].map(String::from));
    accounts.extend((0..50u64).map(|n| format!("{:09}", n * 19_650_419)));
    accounts
}

#[test]
fn test_no_rule_banks_always_valid() {
    for bank in [13, 39, 54] {
        for account in digit_strings() {
            for branch in [-1, 0, 1, 123, 999, 4000, i64::MIN] {
                assert!(
                    validate_israeli_bank_account(bank, branch, &account).unwrap(),
                    "bank {bank} branch {branch} account {account}"
                );
            }
        }
    }
}

#[test]
fn test_every_bank_is_total_over_digit_strings() {
    let registry = default_registry();
    for rule in registry.rules() {
        for account in digit_strings() {
            for branch in [-1, 0, 1, 101, 102, 347, 361, 406, 900, 1000, i64::MAX] {
                let result = validate_israeli_bank_account(i64::from(rule.code), branch, &account);
                assert!(result.is_ok(), "bank {} branch {branch} account {account}", rule.code);
            }
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    for rule in default_registry().rules() {
        let bank = i64::from(rule.code);
        for account in digit_strings() {
            let first = validate_israeli_bank_account(bank, 571, &account).unwrap();
            let second = validate_israeli_bank_account(bank, 571, &account).unwrap();
            assert_eq!(first, second, "bank {} account {account}", rule.code);
        }
    }
}

#[test]
fn test_concurrent_callers_share_registry() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let validator = AccountValidator::default();
                (0..200)
                    .map(|_| validator.validate(10, 936, "07869660").unwrap())
                    .all(|valid| valid)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_non_digit_accounts_raise() {
    for account in ["123-456", "12 345", "", "  ", "0x12", "１２３"] {
        let err = validate_israeli_bank_account(10, 936, account).unwrap_err();
        assert_eq!(err.to_string(), "Account number must contain only digits.", "{account:?}");
    }
}

#[test]
fn test_wrong_types_raise() {
    let cases = [
        (json!("10"), json!(936), json!("07869660")),
        (json!(10), json!("936"), json!("07869660")),
        (json!(10), json!(936), json!(7869660)),
        (json!(10.0), json!(936), json!("07869660")),
        (json!(null), json!(936), json!("07869660")),
    ];
    for (bank, branch, account) in cases {
        let err = validate_json(&bank, &branch, &account).unwrap_err();
        assert!(matches!(err, BankValidatorError::InvalidInputType), "{bank} {branch} {account}");
        assert_eq!(err.to_string(), "Invalid input types. Expected (int, int, str).");
    }
}

#[test]
fn test_unsupported_bank_code() {
    let err = validate_israeli_bank_account(99, 123, "123456").unwrap_err();
    assert!(err.to_string().contains("99"));
    assert_eq!(
        err.to_string(),
        "Bank with code '99' is not supported or does not exist."
    );
}

#[test]
fn test_codes_outside_the_registry_range_are_unsupported() {
    let err = validate_json(&json!(5_000_000_000_i64), &json!(1), &json!("123")).unwrap_err();
    assert!(matches!(err, BankValidatorError::UnsupportedBankCode { code: 5_000_000_000 }));
    assert_eq!(
        err.to_string(),
        "Bank with code '5000000000' is not supported or does not exist."
    );

    let err = validate_israeli_bank_account(-12, 571, "41116").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Bank with code '-12' is not supported or does not exist."
    );
}

#[test]
fn test_negative_branch_is_well_typed() {
    assert!(validate_json(&json!(13), &json!(-1), &json!("123")).unwrap());
    assert!(validate_israeli_bank_account(13, -1, "123").unwrap());
    assert!(validate_israeli_bank_account(23, -1, "111111111").unwrap());
    assert!(!validate_israeli_bank_account(12, -1, "41116").unwrap());
    assert!(!validate_israeli_bank_account(69, -1, "123456771").unwrap());
}

#[test]
fn test_identifier_entry_point() {
    let validator = AccountValidator::default();
    let identifier = BankAccountIdentifier::new(22, 1, "700241017");
    assert!(validator.validate_identifier(&identifier).unwrap());
}
