//! Splitting rendered items into pages with stable filenames
//!
//! Items are chunked in list order. The final chunk is page 0 and is always
//! written to `index.md`; every earlier chunk keeps a name derived from its
//! position counted from the start, so appending items never renames an
//! existing full page.

/// Filename of page 0
pub const INDEX_PAGE: &str = "index.md";

/// Deterministic filename for `page` of `num_pages`
///
/// `index-<NN>-<hh>.md` where `NN = num_pages - page` zero-padded to two
/// digits and `hh` are the first two hex digits of the MD5 of `NN`.
pub fn page_name(page: usize, num_pages: usize) -> String {
    if page == 0 {
        return INDEX_PAGE.to_string();
    }
    let prefix = format!("{:02}", num_pages.saturating_sub(page));
    let digest = format!("{:x}", md5::compute(prefix.as_bytes()));
    format!("index-{}-{}.md", prefix, &digest[..2])
}

/// Number of pages needed for `total` items; at least one
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// One page of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Zero-based page index; 0 is `index.md`
    pub index: usize,
    pub num_pages: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn file_name(&self) -> String {
        page_name(self.index, self.num_pages)
    }

    /// Human page number, 1 for `index.md`
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Splits ordered items into fixed-size pages without reordering them
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Pages ordered by index, page 0 first
    ///
    /// An empty input still yields one empty page.
    pub fn paginate<T: Clone>(&self, items: &[T]) -> Vec<Page<T>> {
        let num_pages = page_count(items.len(), self.page_size);

        (0..num_pages)
            .map(|index| {
                let chunk = num_pages - 1 - index;
                let start = (chunk * self.page_size).min(items.len());
                let end = (start + self.page_size).min(items.len());
                Page {
                    index,
                    num_pages,
                    items: items[start..end].to_vec(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_is_index() {
        for num_pages in 1..30 {
            assert_eq!(page_name(0, num_pages), "index.md");
        }
    }

    #[test]
    fn test_page_name_shape() {
        let name = page_name(1, 3);
        assert!(name.starts_with("index-02-"), "{}", name);
        assert!(name.ends_with(".md"));
        assert_eq!(name.len(), "index-02-xx.md".len());
    }

    #[test]
    fn test_page_name_digest_of_prefix() {
        // md5("01") = 96a3be3cf272e017046d1b2674a52bd3
        assert_eq!(page_name(1, 2), "index-01-96.md");
        assert_eq!(page_name(4, 5), "index-01-96.md");
    }

    #[test]
    fn test_page_name_is_deterministic() {
        assert_eq!(page_name(3, 20), page_name(3, 20));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 12), 1);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(13, 12), 2);
        assert_eq!(page_count(25, 12), 3);
    }

    #[test]
    fn test_last_chunk_is_page_zero() {
        let items: Vec<u32> = (0..13).collect();
        let pages = Paginator::new(12).paginate(&items);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].items, vec![12]);
        assert_eq!(pages[1].items, (0..12).collect::<Vec<_>>());
        assert_eq!(pages[0].file_name(), "index.md");
        assert_eq!(pages[1].file_name(), "index-01-96.md");
    }

    #[test]
    fn test_empty_input_yields_one_page() {
        let pages = Paginator::new(12).paginate::<u32>(&[]);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].items.is_empty());
    }
}
