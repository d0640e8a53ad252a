//! Per-bank check-digit rules, following the MASAV specification.
//!
//! Every rule has the shape `(branch_code, account_number) -> bool` and must be
//! total over digit strings: a length it cannot handle is `false`, never a panic.
//! A negative branch code never forms a digit string, so every checksum that
//! folds the branch in fails for it; rules that ignore the branch are unaffected.

use crate::core::checksum::{
    is_digits, mod11_check, mod97_check, pad_code, weighted_sum, zero_pad, Direction,
};

const DESCENDING_9: [u32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Branch (3 digits) followed by the account padded to `width`.
fn branch_and_account(branch_code: i64, account_number: &str, width: usize) -> String {
    pad_code(branch_code, 3) + &zero_pad(account_number, width)
}

/// Isracard (01).
pub fn isracard(branch_code: i64, account_number: &str) -> bool {
    let full_number = branch_and_account(branch_code, account_number, 7);
    let weights: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    mod11_check(&full_number, &weights, &[0], Direction::RightToLeft)
}

/// Bank Esh (03).
pub fn esh(_branch_code: i64, account_number: &str) -> bool {
    if account_number.len() != 9 {
        return false;
    }
    mod11_check(account_number, &DESCENDING_9, &[0], Direction::LeftToRight)
}

/// Bank Yahav (04).
pub fn yahav(branch_code: i64, account_number: &str) -> bool {
    let full_number = branch_and_account(branch_code, account_number, 6);
    mod11_check(&full_number, &DESCENDING_9, &[0, 2], Direction::LeftToRight)
}

/// Postal Bank (09). Uses a decimal check instead of MOD 11.
pub fn postal_bank(_branch_code: i64, account_number: &str) -> bool {
    if !is_digits(account_number) {
        return false;
    }
    weighted_sum(account_number, &DESCENDING_9, Direction::LeftToRight) % 10 == 0
}

/// Bank Leumi (10).
///
/// The sum covers the branch and the first six account digits; the last two
/// digits must match one of several published constants.
pub fn leumi(branch_code: i64, account_number: &str) -> bool {
    let account = zero_pad(account_number, 8);
    if account.len() != 8 || !is_digits(&account) {
        return false;
    }

    let calculation = pad_code(branch_code, 3) + &account[..6];
    if !is_digits(&calculation) {
        return false;
    }
    let weights: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
    let base_sum = weighted_sum(&calculation, &weights, Direction::LeftToRight);

    let Ok(check_digits) = account[6..].parse::<u32>() else {
        return false;
    };

    let mut constants = vec![128, 180, 330, 340];
    if !matches!(&account[4..6], "00" | "20" | "23") {
        constants.push(110);
    }

    constants.into_iter().any(|constant| {
        let remainder = (base_sum + constant) % 100;
        let expected = if remainder == 0 { 0 } else { 100 - remainder };
        expected == check_digits
    })
}

/// Discount (11) and Mercantile (17).
pub fn discount_group(_branch_code: i64, account_number: &str) -> bool {
    let account = zero_pad(account_number, 9);
    mod11_check(&account, &DESCENDING_9, &[0, 2, 4], Direction::LeftToRight)
}

/// Bank Hapoalim (12).
pub fn hapoalim(branch_code: i64, account_number: &str) -> bool {
    let full_number = branch_and_account(branch_code, account_number, 6);
    mod11_check(&full_number, &DESCENDING_9, &[0, 2, 4, 6], Direction::LeftToRight)
}

/// Banks with no published check-digit rule (13, 39, 54).
pub fn no_rule(_branch_code: i64, _account_number: &str) -> bool {
    true
}

/// First International group (14, 31, 46, 52).
pub fn beinleumi_group(branch_code: i64, account_number: &str) -> bool {
    let full_number = branch_and_account(branch_code, account_number, 6);

    // special branches override the two-step check entirely
    if matches!(branch_code, 347 | 365 | 384 | 385) {
        return mod11_check(&full_number, &DESCENDING_9, &[0, 2], Direction::LeftToRight);
    }
    if matches!(branch_code, 361..=363) {
        return mod11_check(&full_number, &DESCENDING_9, &[0, 2, 4], Direction::LeftToRight);
    }

    if mod11_check(&full_number, &DESCENDING_9, &[0, 6], Direction::LeftToRight) {
        return true;
    }

    let account = zero_pad(account_number, 6);
    let weights: [u32; 6] = [6, 5, 4, 3, 2, 1];
    mod11_check(&account, &weights, &[0, 6], Direction::LeftToRight)
}

/// Ofek (15) and One Zero (18).
pub fn mod97_padded(branch_code: i64, account_number: &str) -> bool {
    mod97_check(branch_code, account_number, true)
}

/// Mizrahi-Tefahot (20). Branches 401-799 are aliases of 1-399.
pub fn mizrahi(branch_code: i64, account_number: &str) -> bool {
    let branch = if (401..=799).contains(&branch_code) {
        branch_code - 400
    } else {
        branch_code
    };
    let full_number = branch_and_account(branch, account_number, 6);
    mod11_check(&full_number, &DESCENDING_9, &[0, 2, 4], Direction::LeftToRight)
}

/// Nima Shefa (21).
pub fn nima(_branch_code: i64, account_number: &str) -> bool {
    if account_number.len() != 8 {
        return false;
    }
    let weights: [u32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];
    mod11_check(account_number, &weights, &[0, 2], Direction::LeftToRight)
}

/// Single trailing check digit: `(11 - sum mod 11) mod 11` over the first eight digits.
fn trailing_check_digit(account_number: &str, weights: &[u32; 8]) -> bool {
    let account = zero_pad(account_number, 9);
    if account.len() != 9 || !is_digits(&account) {
        return false;
    }

    let (body, check) = account.split_at(8);
    let expected = (11 - weighted_sum(body, weights, Direction::LeftToRight) % 11) % 11;
    check.parse::<u32>().is_ok_and(|actual| actual == expected)
}

/// Citibank (22).
pub fn citibank(_branch_code: i64, account_number: &str) -> bool {
    trailing_check_digit(account_number, &[3, 2, 7, 6, 5, 4, 3, 2])
}

/// HSBC (23). Only branches 101 and 102 carry a rule.
pub fn hsbc(branch_code: i64, account_number: &str) -> bool {
    if account_number.len() != 9 || !is_digits(account_number) {
        return false;
    }
    match branch_code {
        101 => matches!(account_number.as_bytes()[6], b'4' | b'9'),
        102 => account_number.ends_with("001"),
        _ => true,
    }
}

/// GROW (35). Branch is used without padding.
pub fn grow(branch_code: i64, account_number: &str) -> bool {
    if branch_code >= 900 {
        return true;
    }
    mod97_check(branch_code, account_number, false)
}

/// Global Remit (47).
pub fn global_remit(_branch_code: i64, account_number: &str) -> bool {
    trailing_check_digit(account_number, &[9, 8, 6, 4, 3, 7, 2, 5])
}

/// Rewire (58).
pub fn rewire(_branch_code: i64, account_number: &str) -> bool {
    if account_number.len() != 9 {
        return false;
    }
    let weights: [u32; 9] = [1, 9, 2, 3, 4, 5, 6, 7, 8];
    mod11_check(account_number, &weights, &[0], Direction::LeftToRight)
}

/// GMT (69).
pub fn gmt(branch_code: i64, account_number: &str) -> bool {
    if branch_code >= 900 {
        return true;
    }
    mod97_check(branch_code, account_number, true)
}

/// 019 Sherutey Tashlum (79): seven account digits and two check digits.
pub fn sherutey_tashlum_019(branch_code: i64, account_number: &str) -> bool {
    mod97_check(branch_code, &zero_pad(account_number, 9), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leumi_published_example() {
        assert!(leumi(936, "07869660"));
        assert!(leumi(936, "7869660"));
        assert!(!leumi(936, "07869661"));
        assert!(!leumi(936, "123456789"));
    }

    #[test]
    fn test_leumi_constant_110_exclusion() {
        // only the 110 constant produces check digits 86 here
        assert!(leumi(936, "00007986"));
        // digits 4..6 == "00" drop the 110 constant
        assert!(!leumi(936, "00000025"));
    }

    #[test]
    fn test_beinleumi_special_branches() {
        assert!(beinleumi_group(347, "100009"));
        // remainder 6 passes the generic rule but not the special one
        assert!(!beinleumi_group(347, "100002"));
        assert!(beinleumi_group(361, "100004"));
        assert!(!beinleumi_group(362, "100018"));
    }

    #[test]
    fn test_beinleumi_six_digit_fallback() {
        assert!(beinleumi_group(1, "100000"));
        assert!(beinleumi_group(1, "32018"));
    }

    #[test]
    fn test_mizrahi_branch_alias() {
        assert_eq!(mizrahi(406, "160778"), mizrahi(6, "160778"));
        assert!(mizrahi(406, "160778"));
        assert_eq!(mizrahi(799, "160778"), mizrahi(399, "160778"));
    }

    #[test]
    fn test_mizrahi_alias_range_ends() {
        assert!(mizrahi(401, "100000"));
        assert!(mizrahi(1, "100000"));
        // 400 and 800 sit outside the alias range and are summed as written
        assert!(mizrahi(400, "100002"));
        assert!(!mizrahi(0, "100002"));
        assert!(mizrahi(800, "100001"));
        assert!(!mizrahi(400, "100001"));
    }

    #[test]
    fn test_remainder_six_is_hapoalim_only() {
        // 001100004 sums to 50, remainder 6
        assert!(hapoalim(1, "100004"));
        assert!(!mizrahi(1, "100004"));
        assert!(!yahav(1, "100004"));
    }

    #[test]
    fn test_hsbc_branches() {
        assert!(hsbc(101, "123456489"));
        assert!(hsbc(101, "123456989"));
        assert!(!hsbc(101, "123456589"));
        assert!(hsbc(102, "123456001"));
        assert!(!hsbc(102, "123456002"));
        assert!(hsbc(5, "111111111"));
        assert!(!hsbc(5, "11111111"));
    }

    #[test]
    fn test_trailing_check_digit_banks() {
        assert!(citibank(1, "700241017"));
        assert!(!citibank(1, "700241018"));
        assert!(!citibank(1, "1700241017"));
        assert!(global_remit(1, "700241014"));
        assert!(!global_remit(1, "700241015"));
    }

    #[test]
    fn test_fixed_length_banks() {
        assert!(esh(1, "247652342"));
        assert!(!esh(1, "24765234"));
        assert!(nima(1, "16632427"));
        assert!(!nima(1, "6632427"));
        assert!(rewire(1, "162144279"));
        assert!(!rewire(1, "162144278"));
    }

    #[test]
    fn test_mod97_banks() {
        assert!(grow(100, "1234593"));
        assert!(!grow(100, "1234594"));
        assert!(!grow(899, "1234593"));
        assert!(grow(950, "1"));
        assert!(gmt(900, "5"));
        assert!(gmt(1, "123456771"));
        assert!(sherutey_tashlum_019(19, "012345637"));
        assert!(sherutey_tashlum_019(19, "12345637"));
        assert!(!sherutey_tashlum_019(19, "012345638"));
    }

    #[test]
    fn test_postal_bank() {
        assert!(postal_bank(1, "059121900"));
        assert!(!postal_bank(1, "059121901"));
    }

    #[test]
    fn test_postal_bank_short_account_weights_from_the_left() {
        // 1*9 + 1*6 + 1*5 = 20
        assert!(postal_bank(1, "10011"));
        // 1*9 + 5*5 = 34, although right-to-left pairing would give 50
        assert!(!postal_bank(1, "10005"));
    }

    #[test]
    fn test_negative_branch() {
        assert!(!leumi(-1, "07869660"));
        assert!(!hapoalim(-1, "41116"));
        assert!(!mizrahi(-1, "160778"));
        assert!(!isracard(-1, "6543203"));
        assert!(!grow(-1, "1234593"));
        assert!(!gmt(-900, "5"));
        assert!(no_rule(-1, "123"));
        assert!(hsbc(-1, "111111111"));
        assert!(!hsbc(-1, "11111111"));
        // account-only checks still apply
        assert!(discount_group(-1, "32018"));
        assert!(beinleumi_group(-1, "32018"));
    }

    #[test]
    fn test_rules_are_total_over_odd_lengths() {
        let rules: [fn(i64, &str) -> bool; 20] = [
            isracard, esh, yahav, postal_bank, leumi, discount_group, hapoalim, no_rule,
            beinleumi_group, mod97_padded, mizrahi, nima, citibank, hsbc, grow, global_remit,
            rewire, gmt, sherutey_tashlum_019, no_rule,
        ];
        let long = "1".repeat(40);
        for rule in rules {
            for account in ["0", "12", "123", "1234567890123", long.as_str()] {
                for branch in [i64::MIN, -1, 0, 1, 999, 1000, i64::from(u32::MAX), i64::MAX] {
                    let _ = rule(branch, account);
                }
            }
        }
    }
}
