use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub current_page: i32,
    pub page_size: i32,
    pub total_elements: i64,
    pub total_pages: i32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationMetadata {
    /// Derives the page metadata from a zero-based page index, the page size
    /// and the total number of matching rows. An empty result set yields zero
    /// pages with both navigation flags off.
    pub fn from_counts(page: i32, size: i32, total: i64) -> Self {
        let size_i64 = i64::from(size.max(1));
        let total_pages = if total > 0 {
            ((total + size_i64 - 1) / size_i64) as i32
        } else {
            0
        };

        Self {
            current_page: page,
            page_size: size,
            total_elements: total,
            total_pages,
            has_next: (i64::from(page) + 1) * size_i64 < total,
            has_previous: page > 0 && total > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_five_elements_in_pages_of_two() {
        let meta = PaginationMetadata::from_counts(0, 2, 5);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_previous);
    }

    #[test]
    fn last_partial_page_has_only_previous() {
        let meta = PaginationMetadata::from_counts(2, 2, 5);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn middle_page_has_both_directions() {
        let meta = PaginationMetadata::from_counts(1, 2, 5);
        assert!(meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn empty_result_set_has_zero_pages_and_no_navigation() {
        let meta = PaginationMetadata::from_counts(0, 20, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_previous);

        let past_the_end = PaginationMetadata::from_counts(3, 20, 0);
        assert!(!past_the_end.has_next);
        assert!(!past_the_end.has_previous);
    }

    #[test]
    fn exact_multiple_of_page_size() {
        let meta = PaginationMetadata::from_counts(1, 2, 4);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
    }
}
