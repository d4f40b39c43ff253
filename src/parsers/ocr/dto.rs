use regex::Captures;
use serde::{Deserialize, Serialize};

/// One transaction line recognized from a page of OCR text.
///
/// Field values are kept exactly as they appear in the source text (grouped
/// thousands separators included). Optional fields that did not match are
/// empty strings, never omitted keys, so the serialized shape is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Ref", default)]
    pub reference: String,
    #[serde(rename = "Withdrawals", default)]
    pub withdrawal: String,
    #[serde(rename = "Deposits", default)]
    pub deposit: String,
    #[serde(rename = "Balance")]
    pub balance: String,
}

impl TransactionRecord {
    pub(super) fn from_captures(caps: &Captures) -> Self {
        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        TransactionRecord {
            date: group("Date"),
            description: group("Description").trim().to_string(),
            reference: group("Ref"),
            withdrawal: group("Withdrawals"),
            deposit: group("Deposits"),
            balance: group("Balance"),
        }
    }
}

/// Transactions recognized on one page, tagged with the zero-based page index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecords {
    pub page: usize,
    pub records: Vec<TransactionRecord>,
}
