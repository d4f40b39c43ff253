use crate::errors::ExtractError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A date token captured from statement text.
///
/// The grammar only checks the `YYYY-MM-DD` shape, so a captured token can
/// still name an impossible calendar date (e.g. `2024-13-40`). This wrapper
/// centralizes the calendar validation done when converting to `NaiveDate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrDate(String);

impl From<String> for OcrDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OcrDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<OcrDate> for NaiveDate {
    type Error = ExtractError;

    fn try_from(date: OcrDate) -> Result<Self, Self::Error> {
        NaiveDate::parse_from_str(date.0.trim(), "%Y-%m-%d")
            .map_err(|_| ExtractError::DateInvalidFormat(date.0))
    }
}

/// A grouped-decimal amount token, e.g. `1,234.56` or `-50.00`.
///
/// Conversion strips the thousands separators before parsing; the captured
/// string itself keeps them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrAmount(String);

impl From<String> for OcrAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OcrAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<OcrAmount> for Decimal {
    type Error = ExtractError;

    fn try_from(amount: OcrAmount) -> Result<Self, Self::Error> {
        amount
            .0
            .trim()
            .replace(',', "")
            .parse::<Decimal>()
            .map_err(|_| ExtractError::AmountInvalidFormat(amount.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("2024-01-15", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())]
    #[case("2024-12-31", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())]
    #[case("2024-02-29", NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())] // leap day
    #[case("  2024-05-01  ", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())]
    fn test_ocr_date_valid(#[case] input: &str, #[case] expected: NaiveDate) {
        let date: OcrDate = input.into();
        let parsed: NaiveDate = date.try_into().unwrap();
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("2024-13-01")] // invalid month
    #[case("2024-00-10")] // invalid month
    #[case("2024-02-30")] // invalid day
    #[case("2025-02-29")] // not a leap year
    #[case("20240115")] // wrong shape
    #[case("")]
    fn test_ocr_date_invalid(#[case] input: &str) {
        let date: OcrDate = input.into();
        let result: Result<NaiveDate, _> = date.try_into();
        assert!(matches!(
            result.unwrap_err(),
            ExtractError::DateInvalidFormat(_)
        ));
    }

    #[rstest]
    #[case("45.67", "45.67")]
    #[case("1,234.56", "1234.56")]
    #[case("10,500.00", "10500.00")]
    #[case("-50.00", "-50.00")]
    #[case("1,000,000.00", "1000000.00")]
    fn test_ocr_amount_valid(#[case] input: &str, #[case] expected: &str) {
        let amount: OcrAmount = input.into();
        let parsed: Decimal = amount.try_into().unwrap();
        assert_eq!(parsed, Decimal::from_str(expected).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("12.3.4")]
    fn test_ocr_amount_invalid(#[case] input: &str) {
        let amount: OcrAmount = input.into();
        let result: Result<Decimal, _> = amount.try_into();
        assert!(matches!(
            result.unwrap_err(),
            ExtractError::AmountInvalidFormat(_)
        ));
    }

    #[test]
    fn test_ocr_date_from_string() {
        let date = OcrDate::from("2024-01-15".to_string());
        let parsed: NaiveDate = date.try_into().unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_ocr_amount_serialization() {
        let amount = OcrAmount::from("1,234.56");
        let json = serde_json::to_string(&amount).unwrap();
        assert!(json.contains("1,234.56"));

        let deserialized: OcrAmount = serde_json::from_str(&json).unwrap();
        let parsed: Decimal = deserialized.try_into().unwrap();
        assert_eq!(parsed, Decimal::from_str("1234.56").unwrap());
    }
}
