use serde::Deserialize;

/// Number of items on a full page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters carrying the requested page number.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<u32>,
}

impl PageQuery {
    /// Requested page, defaulting to the first.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1) as usize
    }
}

/// Returns the 1-indexed `page` window of `items`.
///
/// Pages outside the collection (including page 0, which is below the
/// 1-indexed range) yield an empty slice, never an error; callers decide
/// whether an empty page is a failure.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }

    let end = usize::min(start + QUESTIONS_PER_PAGE, items.len());
    &items[start..end]
}
