//! Find queries, filters, and pages.

use serde_json::Value;

use super::FieldMap;
use crate::types::PageCursor;

/// A field filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// The field equals the given value.
    Eq { field: String, value: Value },

    /// The field value is a member of the given set.
    In { field: String, values: Vec<Value> },
}

impl Filter {
    /// Equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Membership filter.
    pub fn is_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        Filter::In {
            field: field.into(),
            values,
        }
    }

    /// The filtered field name.
    pub fn field(&self) -> &str {
        match self {
            Filter::Eq { field, .. } | Filter::In { field, .. } => field,
        }
    }

    /// Whether the given fields satisfy this filter.
    ///
    /// A missing field never matches.
    pub fn matches(&self, fields: &FieldMap) -> bool {
        match self {
            Filter::Eq { field, value } => fields.get(field) == Some(value),
            Filter::In { field, values } => fields
                .get(field)
                .is_some_and(|v| values.iter().any(|candidate| candidate == v)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// An ordering over a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    /// Order ascending by the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    /// Order descending by the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }

    /// Order by creation time, newest first. The standard listing order.
    pub fn newest_first() -> Self {
        Self::desc(super::document::CREATED_AT)
    }
}

/// A find query: filters, ordering, cursor position, and limit.
///
/// Built incrementally:
///
/// ```
/// use herdbook_core::{Filter, FindQuery, OrderBy};
///
/// let query = FindQuery::new()
///     .filter(Filter::eq("agentId", "agent_1"))
///     .order_by(OrderBy::newest_first())
///     .limit(10);
/// assert_eq!(query.filters.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    /// Conjunctive filters; a document must satisfy all of them.
    pub filters: Vec<Filter>,

    /// Result ordering. `None` leaves the order to the store default.
    pub order: Option<OrderBy>,

    /// Start position, strictly after the document the cursor names.
    pub cursor: Option<PageCursor>,

    /// Maximum number of documents to return. `None` returns all matches.
    pub limit: Option<u32>,
}

impl FindQuery {
    /// An unrestricted query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the ordering.
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order = Some(order);
        self
    }

    /// Resume strictly after the given cursor.
    pub fn after(mut self, cursor: PageCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Optionally resume strictly after the given cursor.
    pub fn after_opt(mut self, cursor: Option<PageCursor>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Limit the number of returned documents.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A batch of documents returned by a find query.
#[derive(Debug, Clone)]
pub struct DocumentPage {
    /// The matching documents, in query order.
    pub documents: Vec<super::Document>,

    /// A handle naming the last returned document, if any. Feed it back
    /// through [`FindQuery::after`] with the same filters and order to
    /// continue where this batch stopped.
    pub last: Option<PageCursor>,
}

impl DocumentPage {
    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
