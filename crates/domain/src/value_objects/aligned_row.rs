//! One logical row spread across a group of parallel lists.
//!
//! A row always has exactly one cell per list in its group, so appending it
//! keeps every list in the group the same length.

use serde::{Deserialize, Serialize};

/// Cell text used when a parallel value is not available
pub const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedRow {
    cells: Vec<String>,
}

impl AlignedRow {
    /// A row of `width` placeholder cells
    pub fn placeholder(width: usize) -> Self {
        Self {
            cells: vec![PLACEHOLDER.to_string(); width],
        }
    }

    /// A row whose first cell is `key` and whose other cells are placeholders
    pub fn keyed(width: usize, key: impl Into<String>) -> Self {
        let mut row = Self::placeholder(width);
        if let Some(first) = row.cells.first_mut() {
            *first = key.into();
        }
        row
    }

    /// Build a row of exactly `width` cells.
    ///
    /// Missing or `None` cells become placeholders, blank cells too. Cells past
    /// `width` are dropped.
    pub fn from_cells<I>(width: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut padded: Vec<String> = cells
            .into_iter()
            .take(width)
            .map(|cell| match cell {
                Some(text) if !text.trim().is_empty() => text,
                _ => PLACEHOLDER.to_string(),
            })
            .collect();
        padded.resize(width, PLACEHOLDER.to_string());
        Self { cells: padded }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}
