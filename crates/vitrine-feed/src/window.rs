//! Revealed-window pagination math.

/// Number of catalog entries revealed per page load.
pub const PAGE_SIZE: usize = 12;

/// A monotonically growing prefix over the catalog.
///
/// Invariant: `0 <= revealed <= total`. The window grows in `page_size`
/// increments and saturates at the catalog length; it never shrinks — a
/// recovery path builds a fresh window instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedWindow {
    page_size: usize,
    revealed: usize,
    total: usize,
}

impl RevealedWindow {
    /// Window over a catalog of `total` entries with the first page
    /// revealed synchronously.
    pub fn first_page(page_size: usize, total: usize) -> Self {
        Self {
            page_size,
            revealed: page_size.min(total),
            total,
        }
    }

    /// Window over an empty catalog, nothing revealed.
    pub fn empty(page_size: usize) -> Self {
        Self {
            page_size,
            revealed: 0,
            total: 0,
        }
    }

    /// Reveal up to one further page, saturating at the catalog length.
    /// Returns the new revealed count.
    pub fn advance(&mut self) -> usize {
        self.revealed = (self.revealed + self.page_size).min(self.total);
        self.revealed
    }

    /// Number of entries currently revealed.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Catalog length this window ranges over.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether unrevealed entries remain.
    pub fn has_more(&self) -> bool {
        self.revealed < self.total
    }
}
