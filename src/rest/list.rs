//! Cursor pagination.
//!
//! List endpoints return one page at a time inside a [`List`] envelope. A
//! [`ListIter`] walks every page by passing the id of the last item it
//! yielded as the `starting_after` cursor of the next request (or
//! `ending_before` when the caller started from an `ending_before` cursor).
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{ListParams, RestResource};
//! use stripe_api::rest::resources::{BalanceTransaction, BalanceTransactionListParams};
//!
//! let params = BalanceTransactionListParams {
//!     list: ListParams::new().limit(10),
//!     ..Default::default()
//! };
//!
//! let mut iter = BalanceTransaction::list(&client, &params);
//! while iter.next().await {
//!     let txn = iter.current().unwrap();
//!     println!("{} {}", txn.id, txn.amount);
//! }
//! if let Some(err) = iter.err() {
//!     eprintln!("listing stopped: {err}");
//! }
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::clients::FormValues;
use crate::rest::expandable::Identifiable;
use crate::rest::ResourceError;

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct List<T> {
    /// Always `"list"`.
    #[serde(default)]
    pub object: String,
    /// The items on this page, in API order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Whether more items exist after this page.
    #[serde(default)]
    pub has_more: bool,
    /// The endpoint this page came from.
    #[serde(default)]
    pub url: String,
    /// Total number of items, when the endpoint reports it.
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T> List<T> {
    /// Returns the page metadata.
    #[must_use]
    pub fn meta(&self) -> ListMeta {
        ListMeta {
            has_more: self.has_more,
            url: self.url.clone(),
            total_count: self.total_count,
        }
    }
}

/// Metadata of a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMeta {
    /// Whether more items exist after this page.
    pub has_more: bool,
    /// The endpoint this page came from.
    pub url: String,
    /// Total number of items, when reported.
    pub total_count: Option<u64>,
}

/// Parameters shared by every list endpoint.
///
/// Resource-specific list params embed this with `#[serde(flatten)]`.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::to_form_values;
/// use stripe_api::rest::ListParams;
///
/// let params = ListParams::new().limit(3).starting_after("txn_123").expand("data.source");
/// let form = to_form_values(&params).unwrap();
///
/// assert_eq!(form.get("limit"), Some("3"));
/// assert_eq!(form.get("starting_after"), Some("txn_123"));
/// assert_eq!(form.get("expand[0]"), Some("data.source"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Page size, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Cursor: return items after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Cursor: return items before this id. Iteration runs backwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    /// Fields to expand in each item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Stop after the first page.
    #[serde(skip)]
    pub single: bool,
}

impl ListParams {
    /// Creates empty list params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Starts after this id.
    #[must_use]
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// Starts before this id and iterates backwards.
    #[must_use]
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }

    /// Adds a field to expand.
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Stops after the first page.
    #[must_use]
    pub const fn single(mut self, single: bool) -> Self {
        self.single = single;
        self
    }
}

/// List parameter structs that embed [`ListParams`].
pub trait ListFilters {
    /// Returns the shared list params.
    fn list_params(&self) -> &ListParams;
}

impl ListFilters for ListParams {
    fn list_params(&self) -> &ListParams {
        self
    }
}

/// A filter on an integer field such as `created`.
///
/// Encodes as `created=123` or `created[gte]=...&created[lt]=...`.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::RangeQuery;
///
/// let range = RangeQuery::range().gte(1_560_000_000).lt(1_570_000_000);
/// let json = serde_json::to_value(&range).unwrap();
/// assert_eq!(json["gte"], 1_560_000_000);
/// assert!(json.get("gt").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RangeQuery {
    /// Exact match.
    Exact(i64),
    /// Any combination of bounds.
    Range(RangeBounds),
}

/// Bounds of a [`RangeQuery`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeBounds {
    /// Greater than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    /// Greater than or equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    /// Less than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    /// Less than or equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
}

impl RangeQuery {
    /// An empty range, to be narrowed with the bound setters.
    #[must_use]
    pub const fn range() -> Self {
        Self::Range(RangeBounds {
            gt: None,
            gte: None,
            lt: None,
            lte: None,
        })
    }

    /// Sets the `gt` bound.
    #[must_use]
    pub const fn gt(self, value: i64) -> Self {
        let mut bounds = self.bounds();
        bounds.gt = Some(value);
        Self::Range(bounds)
    }

    /// Sets the `gte` bound.
    #[must_use]
    pub const fn gte(self, value: i64) -> Self {
        let mut bounds = self.bounds();
        bounds.gte = Some(value);
        Self::Range(bounds)
    }

    /// Sets the `lt` bound.
    #[must_use]
    pub const fn lt(self, value: i64) -> Self {
        let mut bounds = self.bounds();
        bounds.lt = Some(value);
        Self::Range(bounds)
    }

    /// Sets the `lte` bound.
    #[must_use]
    pub const fn lte(self, value: i64) -> Self {
        let mut bounds = self.bounds();
        bounds.lte = Some(value);
        Self::Range(bounds)
    }

    // An exact value becomes an inclusive range on both ends.
    const fn bounds(self) -> RangeBounds {
        match self {
            Self::Exact(v) => RangeBounds {
                gt: None,
                gte: Some(v),
                lt: None,
                lte: Some(v),
            },
            Self::Range(bounds) => bounds,
        }
    }
}

/// The result of a delete operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Deleted {
    /// Id of the deleted object.
    #[serde(default)]
    pub id: String,
    /// Type of the deleted object.
    #[serde(default)]
    pub object: String,
    /// Always `true` on success.
    #[serde(default)]
    pub deleted: bool,
}

/// A future resolving to one page.
pub type PageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<List<T>, ResourceError>> + Send + 'a>>;

/// Fetches one page for the given query.
pub type PageFetcher<'a, T> = Box<dyn FnMut(FormValues) -> PageFuture<'a, T> + Send + 'a>;

/// Where a [`ListIter`] is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IterState {
    /// Positioned on an item, or not started.
    Ready,
    /// A page fetch is in flight.
    Advancing,
    /// Every item has been yielded.
    Exhausted,
    /// A page fetch failed; see [`ListIter::err`].
    Errored,
}

/// A forward-only, single-pass cursor over a paginated collection.
///
/// The first page is fetched on the first call to [`next`](Self::next).
/// Items are yielded in the order the API returns them, except that pages
/// are reversed when iterating backwards from an `ending_before` cursor.
pub struct ListIter<'a, T> {
    fetch: Option<PageFetcher<'a, T>>,
    filters: FormValues,
    page: VecDeque<T>,
    current: Option<T>,
    meta: Option<ListMeta>,
    fetched: bool,
    single: bool,
    backwards: bool,
    state: IterState,
    error: Option<ResourceError>,
}

impl<'a, T: Identifiable + Send> ListIter<'a, T> {
    /// Creates an iterator over the pages `fetch` returns.
    ///
    /// `filters` is the encoded query of the first request. The cursor key
    /// is updated in place before each further request.
    #[must_use]
    pub fn new(filters: FormValues, single: bool, fetch: PageFetcher<'a, T>) -> Self {
        let backwards = filters.get("ending_before").is_some();
        Self {
            fetch: Some(fetch),
            filters,
            page: VecDeque::new(),
            current: None,
            meta: None,
            fetched: false,
            single,
            backwards,
            state: IterState::Ready,
            error: None,
        }
    }

    /// Creates an iterator that yields nothing and reports `error`.
    #[must_use]
    pub fn failed(error: ResourceError) -> Self {
        Self {
            fetch: None,
            filters: FormValues::new(),
            page: VecDeque::new(),
            current: None,
            meta: None,
            fetched: false,
            single: false,
            backwards: false,
            state: IterState::Errored,
            error: Some(error),
        }
    }

    /// Advances to the next item, fetching a page if needed.
    ///
    /// Returns `false` once the collection is exhausted or a fetch failed.
    /// After that it keeps returning `false` without further requests.
    pub async fn next(&mut self) -> bool {
        if matches!(self.state, IterState::Exhausted | IterState::Errored) {
            return false;
        }

        loop {
            if let Some(item) = self.page.pop_front() {
                self.current = Some(item);
                self.state = IterState::Ready;
                return true;
            }

            let more = !self.fetched
                || (!self.single && self.meta.as_ref().is_some_and(|m| m.has_more));
            if !more {
                self.finish(IterState::Exhausted);
                return false;
            }

            if let Some(current) = &self.current {
                let cursor = if self.backwards {
                    "ending_before"
                } else {
                    "starting_after"
                };
                self.filters.set(cursor, current.id());
            }

            let Some(fetch) = self.fetch.as_mut() else {
                self.finish(IterState::Exhausted);
                return false;
            };

            self.state = IterState::Advancing;
            match fetch(self.filters.clone()).await {
                Ok(list) => {
                    self.fetched = true;
                    self.meta = Some(list.meta());
                    let mut data = list.data;
                    if self.backwards {
                        data.reverse();
                    }
                    if data.is_empty() {
                        self.finish(IterState::Exhausted);
                        return false;
                    }
                    self.page = data.into();
                }
                Err(error) => {
                    tracing::debug!(%error, "List page fetch failed");
                    self.error = Some(error);
                    self.finish(IterState::Errored);
                    return false;
                }
            }
        }
    }

    fn finish(&mut self, state: IterState) {
        self.current = None;
        self.page.clear();
        self.fetch = None;
        self.state = state;
    }
}

impl<'a, T> ListIter<'a, T> {
    /// Returns the item the last successful [`next`](Self::next) moved to.
    #[must_use]
    pub const fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns the error that stopped iteration, if any.
    #[must_use]
    pub const fn err(&self) -> Option<&ResourceError> {
        self.error.as_ref()
    }

    /// Takes the error that stopped iteration, if any.
    pub fn take_err(&mut self) -> Option<ResourceError> {
        self.error.take()
    }

    /// Returns the metadata of the last page fetched.
    #[must_use]
    pub const fn meta(&self) -> Option<&ListMeta> {
        self.meta.as_ref()
    }

    /// Returns the iterator state.
    #[must_use]
    pub const fn state(&self) -> IterState {
        self.state
    }
}

impl<'a, T: Identifiable + Clone + Send> ListIter<'a, T> {
    /// Drains every remaining item.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed page fetch.
    pub async fn collect_all(mut self) -> Result<Vec<T>, ResourceError> {
        let mut items = Vec::new();
        while self.next().await {
            if let Some(item) = self.current() {
                items.push(item.clone());
            }
        }
        match self.error {
            Some(error) => Err(error),
            None => Ok(items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIter")
            .field("filters", &self.filters)
            .field("buffered", &self.page.len())
            .field("current", &self.current)
            .field("meta", &self.meta)
            .field("state", &self.state)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::to_form_values;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    impl Identifiable for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn page(ids: &[&str], has_more: bool) -> List<Item> {
        List {
            object: "list".to_string(),
            data: ids
                .iter()
                .map(|id| Item {
                    id: (*id).to_string(),
                })
                .collect(),
            has_more,
            url: "/v1/items".to_string(),
            total_count: None,
        }
    }

    type Pages = Vec<Result<List<Item>, ResourceError>>;

    /// Serves `pages` in order and records every query it receives.
    fn scripted(pages: Pages) -> (PageFetcher<'static, Item>, Arc<Mutex<Vec<FormValues>>>) {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&queries);
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));

        let fetch: PageFetcher<'static, Item> = Box::new(move |form| {
            seen.lock().unwrap().push(form);
            let next = pages.lock().unwrap().pop_front();
            let reply: PageFuture<'static, Item> =
                Box::pin(async move { next.unwrap_or_else(|| Ok(page(&[], false))) });
            reply
        });
        (fetch, queries)
    }

    fn not_found() -> ResourceError {
        ResourceError::NotFound {
            resource: "Item",
            id: "x".to_string(),
            request_id: None,
        }
    }

    async fn drain(iter: &mut ListIter<'_, Item>) -> Vec<String> {
        let mut ids = Vec::new();
        while iter.next().await {
            ids.push(iter.current().unwrap().id.clone());
        }
        ids
    }

    // === Pagination Tests ===

    #[tokio::test]
    async fn test_walks_pages_with_starting_after_cursor() {
        let (fetch, queries) = scripted(vec![
            Ok(page(&["a", "b"], true)),
            Ok(page(&["c"], false)),
        ]);
        let filters: FormValues = [("limit", "2")].into_iter().collect();
        let mut iter = ListIter::new(filters, false, fetch);

        assert_eq!(drain(&mut iter).await, vec!["a", "b", "c"]);
        assert_eq!(iter.state(), IterState::Exhausted);
        assert!(iter.err().is_none());
        assert!(iter.current().is_none());

        let queries = queries.lock().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].get("starting_after"), None);
        assert_eq!(queries[1].get("starting_after"), Some("b"));
        assert_eq!(queries[1].get("limit"), Some("2"));
    }

    #[tokio::test]
    async fn test_backwards_paging_reverses_pages_and_moves_ending_before() {
        let (fetch, queries) = scripted(vec![
            Ok(page(&["d", "e"], true)),
            Ok(page(&["b", "c"], false)),
        ]);
        let filters = to_form_values(&ListParams::new().ending_before("f")).unwrap();
        let mut iter = ListIter::new(filters, false, fetch);

        assert_eq!(drain(&mut iter).await, vec!["e", "d", "c", "b"]);

        let queries = queries.lock().unwrap();
        assert_eq!(queries[0].get("ending_before"), Some("f"));
        assert_eq!(queries[1].get("ending_before"), Some("d"));
        assert_eq!(queries[1].get("starting_after"), None);
    }

    #[tokio::test]
    async fn test_single_stops_after_first_page() {
        let (fetch, queries) = scripted(vec![
            Ok(page(&["a"], true)),
            Ok(page(&["b"], false)),
        ]);
        let mut iter = ListIter::new(FormValues::new(), true, fetch);

        assert_eq!(drain(&mut iter).await, vec!["a"]);
        assert_eq!(queries.lock().unwrap().len(), 1);
        assert!(iter.meta().unwrap().has_more);
    }

    #[tokio::test]
    async fn test_empty_first_page_is_exhausted() {
        let (fetch, _) = scripted(vec![Ok(page(&[], true))]);
        let mut iter = ListIter::new(FormValues::new(), false, fetch);

        assert!(!iter.next().await);
        assert_eq!(iter.state(), IterState::Exhausted);
        assert!(iter.current().is_none());
    }

    // === Error Tests ===

    #[tokio::test]
    async fn test_error_on_second_page_after_first_page_items() {
        let (fetch, _) = scripted(vec![Ok(page(&["a", "b"], true)), Err(not_found())]);
        let mut iter = ListIter::new(FormValues::new(), false, fetch);

        assert!(iter.next().await);
        assert!(iter.next().await);
        assert!(!iter.next().await);

        assert_eq!(iter.state(), IterState::Errored);
        assert!(iter.err().unwrap().is_not_found());
        assert!(iter.current().is_none());
    }

    #[tokio::test]
    async fn test_terminal_states_stay_terminal() {
        let (fetch, queries) = scripted(vec![Err(not_found()), Ok(page(&["a"], false))]);
        let mut iter = ListIter::new(FormValues::new(), false, fetch);

        assert!(!iter.next().await);
        assert!(!iter.next().await);
        assert_eq!(queries.lock().unwrap().len(), 1);
        assert_eq!(iter.state(), IterState::Errored);
    }

    #[tokio::test]
    async fn test_failed_iterator_reports_error_without_fetching() {
        let mut iter: ListIter<'_, Item> = ListIter::failed(not_found());
        assert!(!iter.next().await);
        assert!(iter.err().is_some());
        assert!(iter.take_err().is_some());
        assert!(iter.err().is_none());
    }

    #[tokio::test]
    async fn test_collect_all() {
        let (fetch, _) = scripted(vec![Ok(page(&["a"], true)), Ok(page(&["b"], false))]);
        let items = ListIter::new(FormValues::new(), false, fetch)
            .collect_all()
            .await
            .unwrap();
        assert_eq!(items.len(), 2);

        let (fetch, _) = scripted(vec![Ok(page(&["a"], true)), Err(not_found())]);
        let result = ListIter::new(FormValues::new(), false, fetch)
            .collect_all()
            .await;
        assert!(result.is_err());
    }

    // === Params Tests ===

    #[test]
    fn test_list_params_skip_single_and_empty_fields() {
        let form = to_form_values(&ListParams::new().single(true)).unwrap();
        assert!(form.is_empty());
    }

    #[test]
    fn test_range_query_encoding() {
        #[derive(Serialize)]
        struct Filters {
            created: RangeQuery,
            available_on: RangeQuery,
        }

        let form = to_form_values(&Filters {
            created: RangeQuery::range().gte(100).lt(200),
            available_on: RangeQuery::Exact(300),
        })
        .unwrap();

        assert_eq!(form.get("created[gte]"), Some("100"));
        assert_eq!(form.get("created[lt]"), Some("200"));
        assert_eq!(form.get("created[gt]"), None);
        assert_eq!(form.get("available_on"), Some("300"));
    }

    #[test]
    fn test_list_envelope_decodes_with_missing_fields() {
        let list: List<Item> =
            serde_json::from_value(serde_json::json!({"data": [{"id": "a"}]})).unwrap();
        assert_eq!(list.data.len(), 1);
        assert!(!list.has_more);
        assert_eq!(list.meta(), ListMeta::default());
    }
}
