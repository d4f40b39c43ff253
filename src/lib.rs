//! Extract financial transactions from OCR text of scanned bank statements.
//!
//! ```rust,ignore
//! use statement_ocr_rs::ExtractorBuilder;
//!
//! let transactions = ExtractorBuilder::new()
//!     .page(&page_text)
//!     .parse()?;
//! ```

mod builder;
mod types;

pub mod errors;
pub mod parsers;

pub use builder::ExtractorBuilder;
pub use parsers::prelude::*;
pub use types::Transaction;
