/// Items per page when `limit` is not supplied.
pub const DEFAULT_LIMIT: i64 = 30;
/// Leading items skipped when `offset` is not supplied.
pub const DEFAULT_OFFSET: i64 = 0;
/// Items per seek window when `count` is not supplied.
pub const DEFAULT_COUNT: i64 = 30;
/// Exclusive identifier lower bound when `last_id` is not supplied.
pub const DEFAULT_LAST_ID: i64 = 0;

/// How a listing is windowed. Exactly one strategy is active and only its
/// fields exist.
///
/// Negative values are representable; rejecting or clamping them is left to
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pagination {
    /// Every matching record.
    #[default]
    All,
    /// Skip `offset` items, then return at most `limit`.
    Page { limit: i64, offset: i64 },
    /// Return at most `count` items whose identifier is greater than `last_id`.
    Seek { last_id: i64, count: i64 },
}

impl Pagination {
    /// Offset pagination with default window.
    pub const fn page() -> Self {
        Pagination::Page {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }

    /// Seek pagination from the start of the identifier range.
    pub const fn seek() -> Self {
        Pagination::Seek {
            last_id: DEFAULT_LAST_ID,
            count: DEFAULT_COUNT,
        }
    }

    pub fn is_seek(&self) -> bool {
        matches!(self, Pagination::Seek { .. })
    }
}
