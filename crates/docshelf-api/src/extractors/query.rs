//! Query parameter helpers.

use std::str::FromStr;

use docshelf_core::error::AppError;

/// Parse an optional query value, falling back to the type's default.
///
/// Unknown values are a validation error rather than a silent default.
pub fn parse_or_default<T>(value: Option<&str>) -> Result<T, AppError>
where
    T: FromStr<Err = AppError> + Default,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.parse(),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshelf_core::error::ErrorKind;
    use docshelf_core::types::GroupSort;

    #[test]
    fn test_absent_or_blank_uses_default() {
        assert_eq!(parse_or_default::<GroupSort>(None).unwrap(), GroupSort::Name);
        assert_eq!(parse_or_default::<GroupSort>(Some(" ")).unwrap(), GroupSort::Name);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = parse_or_default::<GroupSort>(Some("size")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(parse_or_default::<GroupSort>(Some("clicks")).unwrap(), GroupSort::Clicks);
    }
}
