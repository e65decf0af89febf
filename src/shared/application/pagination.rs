/// Cursor pagination support for queries
///
/// Pages are ordered by an ascending, unique key; the cursor is the key of the last
/// item handed out and acts as an exclusive lower bound for the next page.
use serde::{Deserialize, Serialize};

/// Pagination parameters for keyset queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorParams {
    /// Page size; zero or less means "no truncation"
    pub limit: i64,
    pub cursor: Option<String>,
}

impl CursorParams {
    pub fn new(limit: i64, cursor: Option<String>) -> Self {
        Self {
            limit,
            cursor: cursor.filter(|c| !c.is_empty()),
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.limit > 0
    }

    /// Rows to fetch: one more than the page so a following page can be detected
    pub fn fetch_limit(&self) -> Option<i64> {
        self.is_bounded().then(|| self.limit.saturating_add(1))
    }
}

/// One page of results plus the cursor for the next one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T> CursorPage<T> {
    /// Build a page from up to `limit + 1` rows fetched in key order
    pub fn from_overfetch<F>(mut rows: Vec<T>, params: &CursorParams, key: F) -> Self
    where
        F: Fn(&T) -> String,
    {
        if !params.is_bounded() {
            return Self {
                items: rows,
                next_cursor: None,
            };
        }

        let limit = params.limit as usize;
        if rows.len() > limit {
            rows.truncate(limit);
            let next_cursor = rows.last().map(&key);
            Self {
                items: rows,
                next_cursor,
            }
        } else {
            Self {
                items: rows,
                next_cursor: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("m_{:02}", i)).collect()
    }

    #[test]
    fn overfetch_sets_cursor_to_last_kept_item() {
        let params = CursorParams::new(2, None);
        let page = CursorPage::from_overfetch(ids(3), &params, |s| s.clone());
        assert_eq!(page.items, vec!["m_01", "m_02"]);
        assert_eq!(page.next_cursor.as_deref(), Some("m_02"));
    }

    #[test]
    fn exact_fit_has_no_next_cursor() {
        let params = CursorParams::new(3, None);
        let page = CursorPage::from_overfetch(ids(3), &params, |s| s.clone());
        assert_eq!(page.items.len(), 3);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn unbounded_limit_returns_everything() {
        let params = CursorParams::new(0, None);
        assert_eq!(params.fetch_limit(), None);
        let page = CursorPage::from_overfetch(ids(7), &params, |s| s.clone());
        assert_eq!(page.items.len(), 7);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn empty_cursor_is_treated_as_absent() {
        let params = CursorParams::new(5, Some(String::new()));
        assert!(params.cursor.is_none());
        assert_eq!(params.fetch_limit(), Some(6));
    }

    #[test]
    fn huge_limit_does_not_overflow_fetch_limit() {
        let params = CursorParams::new(i64::MAX, None);
        assert_eq!(params.fetch_limit(), Some(i64::MAX));

        let page = CursorPage::from_overfetch(ids(3), &params, |s| s.clone());
        assert_eq!(page.items.len(), 3);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn next_cursor_is_omitted_from_json_when_absent() {
        let page: CursorPage<u8> = CursorPage {
            items: vec![1],
            next_cursor: None,
        };
        assert_eq!(serde_json::to_string(&page).unwrap(), r#"{"items":[1]}"#);
    }
}
