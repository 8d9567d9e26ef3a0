//! Content chunking and page counts.

use crate::error::ConfigError;

/// Split `items` into consecutive groups of at most `size` elements.
///
/// The last group may be shorter. Empty input yields no groups.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, ConfigError> {
    if size == 0 {
        return Err(ConfigError::InvalidPerPage(size));
    }

    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Number of pages `item_count` items fill at `per_page` per page.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}
