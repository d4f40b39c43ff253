mod dto;
mod parser;
mod types;

pub use dto::{PageRecords, TransactionRecord};
pub use parser::{OcrParser, extract_pages, scan_page};
pub use types::{OcrAmount, OcrDate};

pub mod prelude {
    pub use super::{OcrAmount, OcrDate, OcrParser, PageRecords, TransactionRecord, extract_pages, scan_page};
}
