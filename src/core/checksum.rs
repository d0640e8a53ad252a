//! Numeric primitives shared by the bank rules.
//!
//! All functions here are pure. Callers are expected to pass ASCII digit
//! strings; the checks still return `false` instead of panicking when they
//! are handed anything else.

/// Which end of the digit string pairs with the first weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Non-empty and made only of ASCII `0-9`.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Left-pads `value` with zeros to `width` characters. Longer values are returned unchanged.
pub fn zero_pad(value: &str, width: usize) -> String {
    format!("{:0>width$}", value, width = width)
}

/// Zero-pads a code to `width` characters. A negative code keeps its sign in
/// front (`-1` → `-01`), so the result is never a digit string.
pub fn pad_code(code: i64, width: usize) -> String {
    if code < 0 {
        return format!("-{:0width$}", code.unsigned_abs(), width = width.saturating_sub(1));
    }
    format!("{:0width$}", code, width = width)
}

/// Σ digit[i] × weight[i] over the shorter of the two sequences.
pub fn weighted_sum(digits: &str, weights: &[u32], direction: Direction) -> u32 {
    let values = digits.bytes().map(|b| u32::from(b.wrapping_sub(b'0')));
    match direction {
        Direction::LeftToRight => values.zip(weights).map(|(d, w)| d * w).sum(),
        Direction::RightToLeft => values.rev().zip(weights).map(|(d, w)| d * w).sum(),
    }
}

pub fn mod11_check(number: &str, weights: &[u32], acceptable_remainders: &[u32], direction: Direction) -> bool {
    if !is_digits(number) {
        return false;
    }
    let remainder = weighted_sum(number, weights, direction) % 11;
    acceptable_remainders.contains(&remainder)
}

/// Remainder of the decimal number spelled by `digits` modulo `modulus`,
/// computed digit by digit so arbitrarily long inputs never overflow.
fn decimal_remainder(digits: impl Iterator<Item = u8>, modulus: u64) -> u64 {
    digits.fold(0, |acc, b| (acc * 10 + u64::from(b - b'0')) % modulus)
}

/// ISO 7064 style check: the last two account digits must equal
/// `98 - (branch ‖ body) mod 97`, with remainder 1 expecting `97`.
pub fn mod97_check(branch_code: i64, account_number: &str, zero_pad_branch: bool) -> bool {
    if branch_code < 0 || !is_digits(account_number) || account_number.len() < 3 {
        return false;
    }

    let (body, check) = account_number.split_at(account_number.len() - 2);
    let branch = if zero_pad_branch {
        pad_code(branch_code, 3)
    } else {
        branch_code.to_string()
    };

    let Ok(check_digits) = check.parse::<u64>() else {
        return false;
    };

    let remainder = decimal_remainder(branch.bytes().chain(body.bytes()), 97);
    if remainder == 1 {
        return check_digits == 97;
    }
    check_digits == 98 - remainder
}
