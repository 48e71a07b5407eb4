//! Unit conversions from raw node quantities to display values.
//!
//! All functions are pure. Balances are reported by the node in the
//! smallest unit and displayed in a unit 10⁹ times larger, converted in two
//! stages: an integer division that truncates to 10⁶ smallest units, then a
//! floating division by 10³.

/// Bytes in one displayed gigabyte.
pub const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

/// First, truncating stage of the balance conversion.
pub const BALANCE_TRUNCATE_DIVISOR: u64 = 1_000_000;

/// Second, scaling stage of the balance conversion.
pub const BALANCE_SCALE_DIVISOR: f64 = 1_000.0;

/// Whole gigabytes contained in `bytes`, rounded down.
pub fn whole_gb(bytes: u64) -> u64 {
    bytes / BYTES_PER_GB
}

/// `12884901888` → `"12 GB"`.
pub fn bytes_to_gb(bytes: u64) -> String {
    format!("{} GB", whole_gb(bytes))
}

/// Balance in the smallest unit → display unit, e.g. `31204700300` → `"31.204"`.
pub fn smallest_unit_to_display(raw: u64) -> String {
    let truncated = raw / BALANCE_TRUNCATE_DIVISOR;
    (truncated as f64 / BALANCE_SCALE_DIVISOR).to_string()
}

/// Shortest decimal form at single precision, never in exponent notation.
pub fn float_to_display(value: f64) -> String {
    (value as f32).to_string()
}

/// `floor(used / total * 100)`, capped at 100.
///
/// Returns `None` when `total` is zero; callers show 0% and report the
/// condition instead of dividing.
pub fn percent_used(used: u64, total: u64) -> Option<u16> {
    if total == 0 {
        return None;
    }
    let percent = (used as u128 * 100) / total as u128;
    Some(percent.min(100) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_gb_truncates() {
        assert_eq!(bytes_to_gb(0), "0 GB");
        assert_eq!(bytes_to_gb(BYTES_PER_GB - 1), "0 GB");
        assert_eq!(bytes_to_gb(BYTES_PER_GB), "1 GB");
        assert_eq!(bytes_to_gb(12 * BYTES_PER_GB + 500), "12 GB");
    }

    #[test]
    fn test_bytes_to_gb_is_monotonic() {
        let samples = [
            0,
            1,
            BYTES_PER_GB - 1,
            BYTES_PER_GB,
            BYTES_PER_GB + 1,
            3 * BYTES_PER_GB,
            250 * BYTES_PER_GB + 17,
            u64::MAX / 2,
            u64::MAX,
        ];
        for pair in samples.windows(2) {
            assert!(whole_gb(pair[0]) <= whole_gb(pair[1]));
            let lhs: u64 = bytes_to_gb(pair[0]).trim_end_matches(" GB").parse().unwrap();
            let rhs: u64 = bytes_to_gb(pair[1]).trim_end_matches(" GB").parse().unwrap();
            assert!(lhs <= rhs, "{} > {}", lhs, rhs);
        }
    }

    #[test]
    fn test_balance_two_stage_conversion() {
        assert_eq!(smallest_unit_to_display(31_204_700_300), "31.204");
        assert_eq!(smallest_unit_to_display(32_000_000_000), "32");
        // Everything below the first stage is dropped
        assert_eq!(smallest_unit_to_display(999_999), "0");
        assert_eq!(smallest_unit_to_display(1_999_999), "0.001");
    }

    #[test]
    fn test_float_to_display() {
        assert_eq!(float_to_display(0.34), "0.34");
        assert_eq!(float_to_display(2.0), "2");
        assert_eq!(float_to_display(0.1 + 0.2), "0.3");
        assert_eq!(float_to_display(12.125), "12.125");
    }

    #[test]
    fn test_percent_used() {
        assert_eq!(percent_used(5_113_991_168, 8_348_585_984), Some(61));
        assert_eq!(percent_used(0, 100), Some(0));
        assert_eq!(percent_used(100, 100), Some(100));
        assert_eq!(percent_used(3, 4), Some(75));
    }

    #[test]
    fn test_percent_used_guards_zero_total() {
        assert_eq!(percent_used(0, 0), None);
        assert_eq!(percent_used(42, 0), None);
    }

    #[test]
    fn test_percent_used_stays_in_range() {
        let totals = [1, 7, 1024, 8_348_585_984, u64::MAX];
        for total in totals {
            for used in [0, 1, total / 3, total / 2, total - 1, total, u64::MAX] {
                let percent = percent_used(used, total).unwrap();
                assert!(percent <= 100);
            }
        }
    }
}
