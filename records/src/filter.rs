//! In-memory filtering, sorting, and pagination of the curation list.
//!
//! All operations are synchronous and recomputed from scratch on every
//! dependency change. Record counts are hundreds, not millions, so the
//! O(n log n) sort dominates and is still negligible.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use crate::record::ArticleRecord;
use crate::status::CurationStatus;

/// Status dimension of the curation filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Match every status.
    #[default]
    All,
    /// Match exactly one derived status.
    Only(CurationStatus),
}

/// Sort direction for the fixed row-number ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Conjunctive filter over the in-memory record set: a record is visible
/// iff it matches the status filter AND the category filter AND the
/// free-text query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordFilter {
    pub status: StatusFilter,
    /// `None` means all categories.
    pub category: Option<String>,
    /// Case-insensitive substring over title and authors. Empty matches
    /// everything.
    pub query: String,
}

impl RecordFilter {
    /// Whether `record` passes every active criterion.
    #[must_use]
    pub fn matches(&self, record: &ArticleRecord) -> bool {
        if let StatusFilter::Only(wanted) = self.status
            && CurationStatus::derive(record) != wanted
        {
            return false;
        }

        if let Some(category) = self.category.as_deref()
            && record.category.as_deref() != Some(category)
        {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let title = record.title.as_deref().unwrap_or_default().to_lowercase();
        let authors = record.authors.as_deref().unwrap_or_default().to_lowercase();
        title.contains(&query) || authors.contains(&query)
    }
}

/// Filter and sort a record set for presentation. The sort key is fixed
/// on the backend row number; records without one sort first.
#[must_use]
pub fn filtered(
    records: &[ArticleRecord],
    filter: &RecordFilter,
    order: SortOrder,
) -> Vec<ArticleRecord> {
    let mut visible: Vec<ArticleRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();

    visible.sort_by_key(|record| record.row_number.unwrap_or(0));
    if order == SortOrder::Desc {
        visible.reverse();
    }
    visible
}

/// Slice one page out of a filtered, sorted list. Pages are zero-based;
/// the last page may be short; out-of-range pages are empty.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    let start = page.saturating_mul(per_page);
    if per_page == 0 || start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(per_page).min(items.len());
    items[start..end].to_vec()
}

/// Aggregate status counts for the curation dashboard. Approved combines
/// manual and AI approvals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub unavailable: usize,
}

/// Count records per derived status bucket.
#[must_use]
pub fn summarize(records: &[ArticleRecord]) -> Summary {
    let mut summary = Summary::default();
    for record in records {
        match CurationStatus::derive(record) {
            CurationStatus::ManualApproved | CurationStatus::ApprovedAi => summary.approved += 1,
            CurationStatus::Pending => summary.pending += 1,
            CurationStatus::RejectedAi => summary.rejected += 1,
            CurationStatus::Unavailable => summary.unavailable += 1,
        }
    }
    summary
}

/// Distinct non-empty categories present in the record set, sorted.
#[must_use]
pub fn categories(records: &[ArticleRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.category.as_deref())
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(ToOwned::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
