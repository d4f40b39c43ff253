use std::fs;

use crate::errors::{ExtractError, ExtractResult};
use crate::parsers::prelude::*;
use crate::types::Transaction;

/// Fluent entry point for extracting transactions from OCR page text.
///
/// Pages can be supplied directly with [`page`](Self::page) /
/// [`pages`](Self::pages); a single block of text with
/// [`content`](Self::content); or a text file with
/// [`filename`](Self::filename). Explicit pages take precedence, then
/// content, then the file on disk.
#[derive(Default)]
pub struct ExtractorBuilder {
    pages: Vec<String>,
    content: Option<String>,
    filepath: Option<String>,
}

impl ExtractorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page of OCR text.
    pub fn page(mut self, text: &str) -> Self {
        self.pages.push(text.to_string());
        self
    }

    /// Append a sequence of pages, in document order.
    pub fn pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pages
            .extend(pages.into_iter().map(|p| p.as_ref().to_string()));
        self
    }

    /// Supply the whole recognized text as a single page.
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Read the page text from a file instead of supplying it inline.
    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    /// Run the scan and return raw records grouped by page.
    pub fn extract(self) -> ExtractResult<Vec<PageRecords>> {
        Ok(extract_pages(self.resolve_pages()?))
    }

    /// Run the scan and convert every record to the typed [`Transaction`].
    pub fn parse(self) -> ExtractResult<Vec<Transaction>> {
        self.parse_into::<Transaction>()
    }

    /// Run the scan and convert every record into `T`, flattened across pages.
    pub fn parse_into<T>(self) -> ExtractResult<Vec<T>>
    where
        T: TryFrom<TransactionRecord, Error = ExtractError>,
    {
        self.extract()?
            .into_iter()
            .flat_map(|page| page.records)
            .map(T::try_from)
            .collect()
    }

    fn resolve_pages(self) -> ExtractResult<Vec<String>> {
        if !self.pages.is_empty() {
            return Ok(self.pages);
        }

        if let Some(content) = self.content {
            return Ok(vec![content]);
        }

        let path = self
            .filepath
            .ok_or(ExtractError::MissingContentAndFilepath)?;
        Ok(vec![fs::read_to_string(path)?])
    }
}
