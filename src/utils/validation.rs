use crate::utils::error::{Result, SolidError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+'\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$";

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SolidError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SolidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SolidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Shape dimensions must be finite and non-negative.
pub fn validate_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SolidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Dimension must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    let re = Regex::new(EMAIL_PATTERN).map_err(|e| SolidError::ConfigError {
        message: format!("email pattern failed to compile: {}", e),
    })?;

    if !re.is_match(email) {
        return Err(SolidError::validation(format!(
            "'{}' is not a valid email address",
            email
        )));
    }
    Ok(())
}

/// 解析日期字串，支援 `YYYY-MM-DD` 與 `YYYY-MM-DD HH:MM:SS`。
///
/// 只有日期時，`end_of_day` 決定補上 00:00:00 或 23:59:59。
pub fn parse_datetime(field_name: &str, value: &str, end_of_day: bool) -> Result<NaiveDateTime> {
    let trimmed = value.trim();

    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT) {
        return Ok(datetime);
    }

    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => {
            let time = if end_of_day {
                NaiveTime::from_hms_opt(23, 59, 59)
            } else {
                NaiveTime::from_hms_opt(0, 0, 0)
            };
            time.map(|t| date.and_time(t))
                .ok_or_else(|| SolidError::DateParseError {
                    value: value.to_string(),
                    reason: format!("{}: time of day out of range", field_name),
                })
        }
        Err(e) => Err(SolidError::DateParseError {
            value: value.to_string(),
            reason: format!("{}: {}", field_name, e),
        }),
    }
}

pub fn validate_date_order(start: NaiveDateTime, end: NaiveDateTime) -> Result<()> {
    if start > end {
        return Err(SolidError::validation(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("x@y").is_err());
    }

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("radius", 2.0).is_ok());
        assert!(validate_dimension("radius", 0.0).is_ok());
        assert!(validate_dimension("radius", -1.0).is_err());
        assert!(validate_dimension("radius", f64::NAN).is_err());
        assert!(validate_dimension("radius", f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_datetime_variants() {
        let start = parse_datetime("start", "2024-01-15", false).unwrap();
        assert_eq!(start.to_string(), "2024-01-15 00:00:00");

        let end = parse_datetime("end", "2024-01-15", true).unwrap();
        assert_eq!(end.to_string(), "2024-01-15 23:59:59");

        let exact = parse_datetime("start", "2024-01-15 14:43:40", true).unwrap();
        assert_eq!(exact.to_string(), "2024-01-15 14:43:40");

        assert!(matches!(
            parse_datetime("start", "15/01/2024", false),
            Err(SolidError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_validate_date_order() {
        let a = parse_datetime("start", "2024-01-01", false).unwrap();
        let b = parse_datetime("end", "2024-01-31", true).unwrap();
        assert!(validate_date_order(a, b).is_ok());
        assert!(validate_date_order(a, a).is_ok());
        assert!(validate_date_order(b, a).is_err());
    }

    #[test]
    fn test_validate_range_and_non_empty() {
        assert!(validate_range("port", 5, 1, 10).is_ok());
        assert!(validate_range("port", 0, 1, 10).is_err());
        assert!(validate_non_empty_string("database.host", "localhost").is_ok());
        assert!(validate_non_empty_string("database.host", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("db.internal".to_string());
        assert_eq!(
            validate_required_field("database.host", &present).unwrap(),
            "db.internal"
        );

        let absent: Option<String> = None;
        assert!(matches!(
            validate_required_field("database.host", &absent),
            Err(SolidError::MissingConfigError { .. })
        ));
    }
}
