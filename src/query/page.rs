//! Response envelopes for listing endpoints.

use serde::Serialize;

use crate::query::pagination::Pagination;

/// Items that carry the identifier seek pagination orders by.
pub trait Identified {
    fn identifier(&self) -> i64;
}

/// Continuation descriptor for offset pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    pub limit: i64,
    pub offset: i64,
}

/// Continuation descriptor for seek pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeekCursor {
    pub last_id: i64,
    pub count: i64,
}

/// Listing payload shaped by the strategy that produced it.
///
/// Serializes as `{"data": [...]}`, `{"data": [...], "page": {..} | null}` or
/// `{"data": [...], "next": {..} | null}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    All {
        data: Vec<T>,
    },
    Page {
        data: Vec<T>,
        page: Option<PageCursor>,
    },
    Seek {
        data: Vec<T>,
        next: Option<SeekCursor>,
    },
}

impl<T: Identified> ListResponse<T> {
    /// Wraps the items storage returned for `pagination`.
    ///
    /// A full window means there may be more, so a descriptor for the next
    /// window is attached; a short window means the end was reached. Assumes
    /// storage returned items in a stable order (ascending identifier under
    /// seek). A negative offset reads from the start, so the page continuation
    /// counts from zero.
    pub fn assemble(items: Vec<T>, pagination: Pagination) -> Self {
        let returned = i64::try_from(items.len()).unwrap_or(i64::MAX);

        match pagination {
            Pagination::All => ListResponse::All { data: items },
            Pagination::Page { limit, offset } => {
                let page = (returned == limit).then(|| PageCursor {
                    limit,
                    offset: offset.max(0).saturating_add(returned),
                });
                ListResponse::Page { data: items, page }
            }
            Pagination::Seek { count, .. } => {
                let last_id = items.iter().map(Identified::identifier).max().unwrap_or(0);
                let next = (returned == count).then_some(SeekCursor { last_id, count });
                ListResponse::Seek { data: items, next }
            }
        }
    }
}

impl<T> ListResponse<T> {
    pub fn data(&self) -> &[T] {
        match self {
            ListResponse::All { data }
            | ListResponse::Page { data, .. }
            | ListResponse::Seek { data, .. } => data,
        }
    }

    pub fn into_data(self) -> Vec<T> {
        match self {
            ListResponse::All { data }
            | ListResponse::Page { data, .. }
            | ListResponse::Seek { data, .. } => data,
        }
    }

    pub fn page_cursor(&self) -> Option<PageCursor> {
        match self {
            ListResponse::Page { page, .. } => *page,
            _ => None,
        }
    }

    pub fn seek_cursor(&self) -> Option<SeekCursor> {
        match self {
            ListResponse::Seek { next, .. } => *next,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Item {
        id: i64,
    }

    impl Identified for Item {
        fn identifier(&self) -> i64 {
            self.id
        }
    }

    fn items(ids: &[i64]) -> Vec<Item> {
        ids.iter().map(|&id| Item { id }).collect()
    }

    #[test]
    fn full_page_advances_offset() {
        let response = ListResponse::assemble(
            items(&[7]),
            Pagination::Page {
                limit: 1,
                offset: 1000,
            },
        );
        assert_eq!(
            response.page_cursor(),
            Some(PageCursor {
                limit: 1,
                offset: 1001
            })
        );
    }

    #[test]
    fn negative_offset_continues_from_zero() {
        let response = ListResponse::assemble(
            items(&[1, 2]),
            Pagination::Page {
                limit: 2,
                offset: -3,
            },
        );
        assert_eq!(
            response.page_cursor(),
            Some(PageCursor {
                limit: 2,
                offset: 2
            })
        );
    }

    #[test]
    fn short_page_has_no_continuation() {
        let response = ListResponse::assemble(
            items(&[]),
            Pagination::Page {
                limit: 1,
                offset: 1000,
            },
        );
        assert_eq!(response.page_cursor(), None);
        assert!(matches!(response, ListResponse::Page { page: None, .. }));

        let response = ListResponse::assemble(
            items(&[1, 2]),
            Pagination::Page {
                limit: 3,
                offset: 0,
            },
        );
        assert_eq!(response.page_cursor(), None);
    }

    #[test]
    fn full_seek_window_points_past_max_identifier() {
        let response = ListResponse::assemble(
            items(&[101, 301]),
            Pagination::Seek {
                last_id: 1,
                count: 2,
            },
        );
        assert_eq!(
            response.seek_cursor(),
            Some(SeekCursor {
                last_id: 301,
                count: 2
            })
        );
    }

    #[test]
    fn seek_uses_maximum_not_last_identifier() {
        let response = ListResponse::assemble(
            items(&[40, 90, 12]),
            Pagination::Seek {
                last_id: 0,
                count: 3,
            },
        );
        assert_eq!(response.seek_cursor().map(|next| next.last_id), Some(90));
    }

    #[test]
    fn short_seek_window_has_no_continuation() {
        let response = ListResponse::assemble(
            items(&[101]),
            Pagination::Seek {
                last_id: 1,
                count: 2,
            },
        );
        assert_eq!(response.seek_cursor(), None);
    }

    #[test]
    fn all_never_continues() {
        for ids in [&[][..], &[1][..], &[1, 2, 3][..]] {
            let response = ListResponse::assemble(items(ids), Pagination::All);
            assert_eq!(response.page_cursor(), None);
            assert_eq!(response.seek_cursor(), None);
            assert_eq!(response.data().len(), ids.len());
        }
    }

    #[test]
    fn envelopes_serialize_per_strategy() {
        let all = ListResponse::assemble(items(&[1]), Pagination::All);
        assert_eq!(
            serde_json::to_value(&all).unwrap(),
            json!({"data": [{"id": 1}]})
        );

        let page = ListResponse::assemble(
            items(&[1, 2]),
            Pagination::Page {
                limit: 2,
                offset: 4,
            },
        );
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"data": [{"id": 1}, {"id": 2}], "page": {"limit": 2, "offset": 6}})
        );

        let seek = ListResponse::assemble(items(&[5]), Pagination::seek());
        assert_eq!(
            serde_json::to_value(&seek).unwrap(),
            json!({"data": [{"id": 5}], "next": null})
        );
    }

    #[test]
    fn into_data_returns_items_unchanged() {
        let response = ListResponse::assemble(items(&[3, 1, 2]), Pagination::page());
        assert_eq!(response.into_data(), items(&[3, 1, 2]));
    }
}
