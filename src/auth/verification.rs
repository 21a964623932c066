// Verification code generation and matching

use rand::Rng;

/// Issues and checks the 6-digit email verification code
///
/// Codes are drawn uniformly from 000000-999999 and always handled as
/// strings so leading zeros survive storage and comparison.
pub struct VerificationCode;

impl VerificationCode {
    /// Generate a fresh zero-padded 6-digit code
    pub fn generate() -> String {
        let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
        format!("{:06}", n)
    }

    /// Compare a stored code against a submitted one
    pub fn matches(stored: &str, submitted: &str) -> bool {
        stored == submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn generated_code_is_six_digits() {
        for _ in 0..100 {
            let code = VerificationCode::generate();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn leading_zeros_are_preserved() {
        // 42 formats as "000042", not "42"
        assert_eq!(format!("{:06}", 42u32), "000042");
        assert!(VerificationCode::matches("000042", "000042"));
        assert!(!VerificationCode::matches("000042", "42"));
    }

    #[test]
    fn mismatched_codes_do_not_match() {
        assert!(!VerificationCode::matches("123456", "123457"));
        assert!(!VerificationCode::matches("123456", ""));
    }

    proptest! {
        #[test]
        fn prop_every_generated_code_parses_in_range(_seed in 0u8..50) {
            let code = VerificationCode::generate();
            let n: u32 = code.parse().unwrap();
            prop_assert!(n < 1_000_000);
            prop_assert_eq!(code.len(), 6);
        }

        #[test]
        fn prop_code_matches_itself_only(a in 0u32..1_000_000, b in 0u32..1_000_000) {
            let sa = format!("{:06}", a);
            let sb = format!("{:06}", b);
            prop_assert_eq!(VerificationCode::matches(&sa, &sb), a == b);
        }
    }
}
