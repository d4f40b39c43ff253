use lazy_static::lazy_static;
use regex::Regex;

use super::dto::{PageRecords, TransactionRecord};
use crate::parsers::traits::Parser;

lazy_static! {
    // Tolerant transaction-line grammar. The date is the anchor; the
    // description is non-greedy so it stops at the first position that lets
    // the Ref/Withdrawals/Deposits/Balance tail complete. Amounts must be
    // thousands-grouped with two fraction digits; only the balance may be
    // negative. A candidate with no parsable balance is rejected whole.
    static ref TXN_LINE: Regex = Regex::new(concat!(
        r"(?P<Date>\d{4}-\d{2}-\d{2})\s+",
        r"(?P<Description>[A-Za-z0-9\-.,& ]+?)\s+",
        r"(?:(?P<Ref>\d{3,5})\s+)?",
        r"(?:(?P<Withdrawals>\d{1,3}(?:,\d{3})*\.\d{2})\s+)?",
        r"(?:(?P<Deposits>\d{1,3}(?:,\d{3})*\.\d{2})\s+)?",
        r"(?P<Balance>-?\d{1,3}(?:,\d{3})*\.\d{2})",
    ))
    .unwrap();

    static ref DATE_ANCHOR: Regex = Regex::new(r"\d{4}-\d{2}-\d{2}\s").unwrap();
}

pub struct OcrParser;

impl Parser for OcrParser {
    type Output = TransactionRecord;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        if let Some(name) = filename {
            let ext = name.to_lowercase();
            if ext.ends_with(".txt") || ext.ends_with(".ocr") {
                return true;
            }
        }

        DATE_ANCHOR.is_match(content)
    }

    fn parse(content: &str) -> Result<Vec<Self::Output>, String> {
        Ok(scan_page(content))
    }
}

/// Scan one page of OCR text for transaction lines, in text order.
///
/// A page with no recognizable lines yields an empty vector; that is a normal
/// result, not an error. The scan is a pure function of its input.
pub fn scan_page(text: &str) -> Vec<TransactionRecord> {
    TXN_LINE
        .captures_iter(text)
        .map(|caps| TransactionRecord::from_captures(&caps))
        .collect()
}

/// Extract transactions from a sequence of page texts, one block per page.
///
/// Pages are scanned independently; output keeps the input page order and,
/// within a page, the text-scan order of matches.
pub fn extract_pages<I, S>(pages: I) -> Vec<PageRecords>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages
        .into_iter()
        .enumerate()
        .map(|(page, text)| {
            let records = scan_page(text.as_ref());
            if records.is_empty() {
                log::debug!("no transaction lines recognized on page {}", page);
            } else {
                log::debug!("page {}: {} transaction lines", page, records.len());
            }
            PageRecords { page, records }
        })
        .collect()
}
