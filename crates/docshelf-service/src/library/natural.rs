//! Natural ordering for folder and file names.

use std::cmp::Ordering;

/// Value used when a name carries no number (or one too large to parse).
const NO_NUMBER: u64 = u64::MAX;

/// The first run of ASCII digits in `name`, parsed as an integer.
pub fn leading_number(name: &str) -> u64 {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(NO_NUMBER)
}

/// Compare two names so that "Unit 2" sorts before "Unit 10".
///
/// Orders by the first embedded number, then case-insensitively, then by
/// the raw name. Names without a number sort after numbered ones.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    leading_number(a)
        .cmp(&leading_number(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(natural_cmp("unit2", "unit10"), Ordering::Less);
        assert_eq!(natural_cmp("Unit 10", "Unit 2"), Ordering::Greater);
        assert_eq!(natural_cmp("2과", "10과"), Ordering::Less);
    }

    #[test]
    fn test_unnumbered_names_sort_last() {
        assert_eq!(natural_cmp("intro", "unit1"), Ordering::Greater);
    }

    #[test]
    fn test_case_variants_sort_adjacently() {
        let mut names = vec!["Unit 3", "unit 2", "Unit 10", "Unit 2"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Unit 2", "unit 2", "Unit 3", "Unit 10"]);
    }

    #[test]
    fn test_total_order_on_equal_keys() {
        assert_eq!(natural_cmp("abc", "abc"), Ordering::Equal);
        assert_ne!(natural_cmp("ABC", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_overflow_uses_sentinel() {
        assert_eq!(leading_number("v99999999999999999999999"), NO_NUMBER);
        assert_eq!(leading_number("ch07-part3"), 7);
    }
}
