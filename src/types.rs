use crate::errors::ExtractError;
use crate::parsers::prelude::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A typed transaction converted from a raw [`TransactionRecord`].
///
/// The raw record keeps every field as the string matched in the page text;
/// this type validates the calendar date and parses the amounts, mapping
/// absent optional fields to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub reference: Option<String>,
    pub withdrawal: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub balance: Decimal,
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn optional_amount(value: String) -> Result<Option<Decimal>, ExtractError> {
    optional(value).map(|v| OcrAmount::from(v).try_into()).transpose()
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = ExtractError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Ok(Transaction {
            date: OcrDate::from(record.date).try_into()?,
            description: record.description,
            reference: optional(record.reference),
            withdrawal: optional_amount(record.withdrawal)?,
            deposit: optional_amount(record.deposit)?,
            balance: OcrAmount::from(record.balance).try_into()?,
        })
    }
}
