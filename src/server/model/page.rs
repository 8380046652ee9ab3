//! Fixed-size, 1-indexed pagination.

/// Number of records in every listing page.
pub const PAGE_SIZE: u64 = 10;

/// Highest page number served. Its offset plus `PAGE_SIZE` still fits in the
/// signed 64-bit integers databases bind `LIMIT`/`OFFSET` as; higher requested
/// pages are clamped to it and come back empty.
pub const MAX_PAGE: u64 = (i64::MAX as u64 - PAGE_SIZE) / PAGE_SIZE;

/// A normalized page request.
///
/// Pages are numbered from 1. A missing page or any number below 1 selects the
/// first page, anything above `MAX_PAGE` selects `MAX_PAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u64);

impl Page {
    pub fn new(number: Option<i64>) -> Self {
        match number {
            Some(n) if n >= 1 => Self((n as u64).min(MAX_PAGE)),
            _ => Self(1),
        }
    }

    /// 1-indexed page number.
    pub fn number(&self) -> u64 {
        self.0
    }

    /// Number of records skipped before this page.
    pub fn offset(&self) -> u64 {
        (self.number() - 1) * PAGE_SIZE
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}
