//! Appends entries to page lists.
//!
//! Parallel list groups are only ever touched through `append_aligned`, which
//! hands the page one entry per list in a single call.

use std::sync::Arc;

use charsheet_domain::AlignedRow;

use crate::ports::outbound::{ListGroup, ListId, PagePort};

#[derive(Clone)]
pub struct ListAppender {
    page: Arc<dyn PagePort>,
}

impl ListAppender {
    pub fn new(page: Arc<dyn PagePort>) -> Self {
        Self { page }
    }

    pub fn append_row(&self, list: ListId, text: impl Into<String>) {
        self.page.append_entries(&[(list, text.into())]);
    }

    /// Append one cell to every list of `group`.
    ///
    /// A row of the wrong width is padded with placeholders or truncated to
    /// the group width.
    pub fn append_aligned(&self, group: ListGroup, row: AlignedRow) {
        let cells = if row.width() == group.width() {
            row.into_cells()
        } else {
            tracing::warn!(
                expected = group.width(),
                actual = row.width(),
                "Aligned row width mismatch, re-padding"
            );
            AlignedRow::from_cells(group.width(), row.into_cells().into_iter().map(Some))
                .into_cells()
        };

        let entries: Vec<(ListId, String)> =
            group.lists().iter().copied().zip(cells).collect();
        self.page.append_entries(&entries);
    }
}
