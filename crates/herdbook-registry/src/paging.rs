//! Keyset pagination over owner-scoped listings.

use serde::de::DeserializeOwned;

use herdbook_core::error::InvalidInputError;
use herdbook_core::{
    Collection, Document, DocumentStore, Filter, FindQuery, OrderBy, PageCursor, Result,
};

/// One page of a listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The page's records, newest first.
    pub items: Vec<T>,

    /// Cursor to continue after this page. Only meaningful with the same
    /// owner key it was issued for.
    pub next_cursor: Option<PageCursor>,

    /// Whether another page exists past this one.
    pub has_more: bool,
}

impl Page<Document> {
    pub(crate) fn decode<T: DeserializeOwned>(self) -> Result<Page<T>> {
        Ok(Page {
            items: self
                .items
                .iter()
                .map(|doc| doc.decode())
                .collect::<Result<_>>()?,
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        })
    }
}

/// Fetch one page of a filtered collection, ordered by creation time
/// descending, reporting whether another page exists.
///
/// `has_more` comes from a follow-up look-ahead for a single document positioned
/// strictly after the last record of the fetched page; that trades one extra
/// round trip for not over-fetching data. A stale cursor propagates as
/// [`InvalidCursor`](herdbook_core::Error::InvalidCursor); callers restart
/// from the beginning. Nothing is cached between calls.
pub(crate) async fn list_page<S: DocumentStore>(
    store: &S,
    collection: &Collection,
    filters: &[Filter],
    page_size: u32,
    cursor: Option<PageCursor>,
) -> Result<Page<Document>> {
    if page_size == 0 {
        return Err(InvalidInputError::Query {
            message: "page size must be at least 1".to_string(),
        }
        .into());
    }

    let base = || {
        let mut query = FindQuery::new().order_by(OrderBy::newest_first());
        for filter in filters {
            query = query.filter(filter.clone());
        }
        query
    };

    let page = store
        .find(collection, &base().after_opt(cursor).limit(page_size))
        .await?;

    if page.is_empty() {
        return Ok(Page {
            items: Vec::new(),
            next_cursor: None,
            has_more: false,
        });
    }

    let next_cursor = page.last.clone();

    let has_more = match &next_cursor {
        Some(last) => {
            let look_ahead = store
                .find(collection, &base().after(last.clone()).limit(1))
                .await?;
            !look_ahead.is_empty()
        }
        None => false,
    };

    Ok(Page {
        items: page.documents,
        next_cursor,
        has_more,
    })
}
