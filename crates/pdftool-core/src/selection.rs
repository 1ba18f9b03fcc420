//! Page selection parsing and validation.
//!
//! Converts a human-entered string like `"1,3-5,7"` into a validated set of
//! zero-based page indices, checked against a known total page count.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// A validated, deduplicated set of zero-based page indices.
///
/// Built from 1-based user input by [`PageSelection::parse`]. Ordering is
/// irrelevant downstream: the editor walks the document's pages in order and
/// tests membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSelection {
    indices: BTreeSet<usize>,
}

impl PageSelection {
    /// Parse a page-selection string against a document's page count.
    ///
    /// `spec` is a comma-separated list of tokens; each token is a single
    /// 1-based page number or an inclusive range `a-b`. Whitespace around
    /// tokens and around the hyphen is ignored. Duplicates and overlapping
    /// ranges union. `"3-3"` is a valid single-page range.
    pub fn parse(spec: &str, page_count: usize) -> Result<Self> {
        if spec.trim().is_empty() {
            return Err(Error::EmptySelection);
        }

        let mut indices = BTreeSet::new();

        for token in spec.split(',') {
            let token = token.trim();

            if let Some((start, end)) = token.split_once('-') {
                let start = parse_page_number(start, token)?;
                let end = parse_page_number(end, token)?;

                if start > end {
                    return Err(Error::InvalidRange { start, end });
                }
                check_bounds(start, page_count)?;
                check_bounds(end, page_count)?;

                // 1-based inclusive range -> 0-based indices
                indices.extend(start - 1..end);
            } else {
                let page = parse_page_number(token, token)?;
                check_bounds(page, page_count)?;
                indices.insert(page - 1);
            }
        }

        Ok(Self { indices })
    }

    /// Build a selection from raw zero-based indices.
    ///
    /// Performs no bounds checking; the editor re-validates every index
    /// against the target document before acting on it.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Number of distinct pages selected.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether the zero-based `index` is part of the selection.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Iterate the selected zero-based indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Largest selected index, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }
}

impl<'a> IntoIterator for &'a PageSelection {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter().copied()
    }
}

/// Parse one side of a token as a 1-based page number.
///
/// `token` is the full token, reported on failure so the user sees the
/// offending input as they typed it.
fn parse_page_number(s: &str, token: &str) -> Result<usize> {
    s.trim().parse::<usize>().map_err(|_| Error::MalformedToken {
        token: token.to_string(),
    })
}

/// A parsed 1-based page number must satisfy `1 <= page <= page_count`.
fn check_bounds(page: usize, page_count: usize) -> Result<()> {
    if page < 1 || page > page_count {
        return Err(Error::PageOutOfBounds {
            page,
            total: page_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(selection: &PageSelection) -> Vec<usize> {
        selection.iter().collect()
    }

    #[test]
    fn single_pages_and_ranges() {
        let sel = PageSelection::parse("1,3-5,7", 10).unwrap();
        assert_eq!(indices(&sel), vec![0, 2, 3, 4, 6]);
    }

    #[test]
    fn single_page_range() {
        let sel = PageSelection::parse("3-3", 5).unwrap();
        assert_eq!(indices(&sel), vec![2]);
    }

    #[test]
    fn overlapping_ranges_union() {
        let sel = PageSelection::parse("1-3,2-5", 6).unwrap();
        assert_eq!(indices(&sel), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn duplicates_collapse() {
        let sel = PageSelection::parse("2,2,2", 5).unwrap();
        assert_eq!(indices(&sel), vec![1]);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn whitespace_ignored() {
        let sel = PageSelection::parse(" 1 , 3 - 5 ", 10).unwrap();
        assert_eq!(indices(&sel), vec![0, 2, 3, 4]);
    }

    #[test]
    fn empty_spec_rejected() {
        assert!(matches!(
            PageSelection::parse("", 5),
            Err(Error::EmptySelection)
        ));
        assert!(matches!(
            PageSelection::parse("   ", 5),
            Err(Error::EmptySelection)
        ));
    }

    #[test]
    fn page_zero_out_of_bounds() {
        assert!(matches!(
            PageSelection::parse("0", 5),
            Err(Error::PageOutOfBounds { page: 0, total: 5 })
        ));
    }

    #[test]
    fn page_past_end_out_of_bounds() {
        assert!(matches!(
            PageSelection::parse("6", 5),
            Err(Error::PageOutOfBounds { page: 6, total: 5 })
        ));
    }

    #[test]
    fn range_end_out_of_bounds() {
        assert!(matches!(
            PageSelection::parse("3-12", 10),
            Err(Error::PageOutOfBounds { page: 12, total: 10 })
        ));
    }

    #[test]
    fn reversed_range_rejected() {
        assert!(matches!(
            PageSelection::parse("5-3", 10),
            Err(Error::InvalidRange { start: 5, end: 3 })
        ));
    }

    #[test]
    fn reversed_range_detected_before_bounds() {
        // 99 and 98 are both out of bounds, but the range shape is checked first
        assert!(matches!(
            PageSelection::parse("99-98", 10),
            Err(Error::InvalidRange { start: 99, end: 98 })
        ));
    }

    #[test]
    fn garbage_token_rejected() {
        assert!(matches!(
            PageSelection::parse("abc", 5),
            Err(Error::MalformedToken { .. })
        ));
    }

    #[test]
    fn negative_number_rejected() {
        // "-5" splits into an empty start, which fails the grammar
        let err = PageSelection::parse("-5", 10).unwrap_err();
        assert!(matches!(err, Error::MalformedToken { ref token } if token == "-5"));
    }

    #[test]
    fn empty_token_rejected() {
        assert!(matches!(
            PageSelection::parse("1,,3", 5),
            Err(Error::MalformedToken { .. })
        ));
    }

    #[test]
    fn double_hyphen_rejected() {
        assert!(matches!(
            PageSelection::parse("1-2-3", 5),
            Err(Error::MalformedToken { .. })
        ));
    }

    #[test]
    fn all_indices_within_bounds() {
        let sel = PageSelection::parse("1-20", 20).unwrap();
        assert!(sel.iter().all(|i| i < 20));
        assert_eq!(sel.len(), 20);
        assert_eq!(sel.max_index(), Some(19));
    }

    #[test]
    fn zero_page_document_rejects_everything() {
        assert!(matches!(
            PageSelection::parse("1", 0),
            Err(Error::PageOutOfBounds { page: 1, total: 0 })
        ));
    }
}
