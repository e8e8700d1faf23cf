//! REST Resource trait for API operations.
//!
//! This module defines the [`RestResource`] trait, which provides a
//! standardized interface for the API's resources. Resources that implement
//! this trait gain `get()`, `list()`, `create()` and `delete()` methods,
//! each one a single round trip (one per page for `list()`).
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives
//! 2. Implement the `RestResource` trait with its associated types and
//!    constants, and [`Identifiable`] if the resource can be listed
//! 3. The trait provides default implementations for every operation whose
//!    path is listed in `PATHS`
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{Identifiable, ListParams, RestResource, ResourcePath, ResourceOperation};
//! use stripe_api::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! #[serde(default)]
//! pub struct OrderReturn {
//!     pub id: String,
//!     pub amount: i64,
//! }
//!
//! impl Identifiable for OrderReturn {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! impl RestResource for OrderReturn {
//!     type GetParams = ();
//!     type ListParams = ListParams;
//!     type CreateParams = ();
//!
//!     const NAME: &'static str = "OrderReturn";
//!     const OBJECT: &'static str = "order_return";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, &["id"], "order_returns/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "order_returns"),
//!     ];
//! }
//!
//! // Usage:
//! let order_return = OrderReturn::get(&client, "orret_123", &()).await?;
//! let mut iter = OrderReturn::list(&client, &ListParams::new());
//! while iter.next().await { /* ... */ }
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{to_form_values, Backend, RequestOptions, RestClient};
use crate::rest::{
    build_path, get_path, Deleted, Identifiable, List, ListFilters, ListIter, PageFuture,
    ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
};

/// A REST resource of the API.
///
/// Implementors define the resource's paths, name and parameter types, and
/// get default implementations of every operation. An operation whose path
/// is missing from `PATHS` fails with
/// [`ResourceError::PathResolutionFailed`] before any request is sent.
///
/// # Associated Types
///
/// - `GetParams`: Query parameters for `get()` (use `()` if none)
/// - `ListParams`: Filters for `list()`, embedding [`ListParams`](crate::rest::ListParams)
/// - `CreateParams`: Form body for `create()` (use `()` if not creatable)
///
/// # Associated Constants
///
/// - `NAME`: The type name used in errors (e.g., "CheckoutSession")
/// - `OBJECT`: The `object` value the API sends (e.g., "checkout.session")
/// - `PATHS`: Available paths for the different operations
#[allow(async_fn_in_trait)]
pub trait RestResource: DeserializeOwned + Clone + Send + Sync + Sized + 'static {
    /// Parameters for `get()` operations.
    type GetParams: Serialize + Sync;

    /// Parameters for `list()` operations.
    type ListParams: Serialize + ListFilters + Sync;

    /// Parameters for `create()` operations.
    type CreateParams: Serialize + Sync;

    /// The type name of the resource (e.g., "OrderReturn").
    const NAME: &'static str;

    /// The `object` field value of the resource.
    const OBJECT: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Retrieves a single resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource can't be retrieved.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let rate = ExchangeRate::get(&client, "usd", &()).await?;
    /// println!("EUR: {}", rate.rates["eur"]);
    /// ```
    async fn get<B: Backend>(
        client: &RestClient<B>,
        id: &str,
        params: &Self::GetParams,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let url = resolve_path::<Self>(ResourceOperation::Get, &[("id", id)])?;
        let query = to_form_values(params)?;

        let response = client
            .get(&url, Some(query), None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(id)))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Creates a new resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the API rejects the parameters.
    /// Returns [`ResourceError::Form`] if the parameters can't be encoded.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let token = TerminalConnectionToken::create(&client, &Default::default()).await?;
    /// println!("secret: {}", token.secret);
    /// ```
    async fn create<B: Backend>(
        client: &RestClient<B>,
        params: &Self::CreateParams,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::create_with_options(client, params, &RequestOptions::default()).await
    }

    /// Creates a new resource with an idempotency key or connected account.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    async fn create_with_options<B: Backend>(
        client: &RestClient<B>,
        params: &Self::CreateParams,
        options: &RequestOptions,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let url = resolve_path::<Self>(ResourceOperation::Create, &[])?;
        let body = to_form_values(params)?;

        let response = client
            .post(&url, Some(body), Some(options))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Deletes a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource can't be deleted.
    async fn delete<B: Backend>(
        client: &RestClient<B>,
        id: &str,
    ) -> Result<ResourceResponse<Deleted>, ResourceError> {
        Self::delete_nested(client, "id", id).await
    }

    /// Deletes a resource addressed through a parent id.
    ///
    /// `parent_id_name` selects the path, e.g. `"customer"` for
    /// `customers/{customer}/discount`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the parent has nothing to delete.
    /// Returns [`ResourceError::PathResolutionFailed`] if no delete path uses `parent_id_name`.
    async fn delete_nested<B: Backend>(
        client: &RestClient<B>,
        parent_id_name: &str,
        parent_id: &str,
    ) -> Result<ResourceResponse<Deleted>, ResourceError> {
        let url = resolve_path::<Self>(ResourceOperation::Delete, &[(parent_id_name, parent_id)])?;

        let response = client
            .delete(&url, None, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(parent_id)))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Returns an iterator over every resource matching `params`.
    ///
    /// No request is sent until the first call to
    /// [`ListIter::next`](crate::rest::ListIter::next). Errors in building
    /// the request are reported by the iterator.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut iter = OrderReturn::list(&client, &OrderReturnListParams::default());
    /// while iter.next().await {
    ///     println!("{}", iter.current().unwrap().id);
    /// }
    /// ```
    fn list<'a, B: Backend + 'a>(
        client: &'a RestClient<B>,
        params: &Self::ListParams,
    ) -> ListIter<'a, Self>
    where
        Self: Identifiable,
    {
        let url = match resolve_path::<Self>(ResourceOperation::List, &[]) {
            Ok(url) => url,
            Err(e) => return ListIter::failed(e),
        };
        let filters = match to_form_values(params) {
            Ok(filters) => filters,
            Err(e) => return ListIter::failed(e.into()),
        };
        let single = params.list_params().single;

        ListIter::new(
            filters,
            single,
            Box::new(move |query| {
                let url = url.clone();
                let page: PageFuture<'a, Self> = Box::pin(async move {
                    let response = client
                        .get(&url, Some(query), None)
                        .await
                        .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;
                    let page: ResourceResponse<List<Self>> =
                        ResourceResponse::from_http_response(response, Self::NAME)?;
                    Ok(page.into_inner())
                });
                page
            }),
        )
    }
}

/// Marker trait for resources the API only lets clients read.
///
/// Implemented by resources whose `PATHS` contain only `Get` and `List`
/// operations.
pub trait ReadOnlyResource: RestResource {}

fn resolve_path<R: RestResource>(
    operation: ResourceOperation,
    ids: &[(&str, &str)],
) -> Result<String, ResourceError> {
    let available: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(R::PATHS, operation, &available).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;

    let ids: HashMap<&str, &str> = ids.iter().copied().collect();
    Ok(build_path(path.template, &ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError};
    use crate::config::ApiKey;
    use crate::rest::ListParams;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    struct MockRun {
        id: String,
        status: String,
    }

    impl Identifiable for MockRun {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[derive(Debug, Default, Serialize)]
    struct MockRunParams {
        report_type: String,
    }

    impl RestResource for MockRun {
        type GetParams = ();
        type ListParams = ListParams;
        type CreateParams = MockRunParams;

        const NAME: &'static str = "MockRun";
        const OBJECT: &'static str = "mock.run";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, &["id"], "runs/{id}"),
            ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "runs"),
            ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "runs"),
            ResourcePath::new(
                HttpMethod::Delete,
                ResourceOperation::Delete,
                &["owner"],
                "owners/{owner}/run",
            ),
        ];
    }

    /// Replies with queued responses and records each request.
    #[derive(Default)]
    struct ScriptedBackend {
        replies: Mutex<Vec<Result<HttpResponse, HttpError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedBackend {
        fn replying(replies: Vec<Result<HttpResponse, HttpError>>) -> Self {
            let mut replies = replies;
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                requests: Mutex::default(),
            }
        }
    }

    impl Backend for ScriptedBackend {
        async fn call(&self, _key: &ApiKey, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(ok(json!({"data": [], "has_more": false}))))
        }
    }

    fn ok(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, std::collections::HashMap::new(), body)
    }

    fn client(replies: Vec<Result<HttpResponse, HttpError>>) -> RestClient<ScriptedBackend> {
        RestClient::with_backend(
            ScriptedBackend::replying(replies),
            ApiKey::new("sk_test_123").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_get_builds_path_and_decodes() {
        let client = client(vec![Ok(ok(json!({"id": "run_1", "status": "pending"})))]);

        let run = MockRun::get(&client, "run_1", &()).await.unwrap();
        assert_eq!(run.status, "pending");

        let requests = client.backend().requests.lock().unwrap();
        assert_eq!(requests[0].path, "/v1/runs/run_1");
        assert_eq!(requests[0].http_method, HttpMethod::Get);
        assert!(requests[0].query.is_none());
    }

    #[tokio::test]
    async fn test_get_maps_404_to_not_found() {
        let client = client(vec![Err(HttpError::Response(HttpResponseError {
            code: 404,
            message: "No such run".to_string(),
            error_reference: None,
            body: json!({"error": {"type": "invalid_request_error"}}),
        }))]);

        let error = MockRun::get(&client, "run_missing", &()).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "MockRun", ref id, .. } if id == "run_missing"
        ));
    }

    #[tokio::test]
    async fn test_create_posts_form_body() {
        let client = client(vec![Ok(ok(json!({"id": "run_2", "status": "pending"})))]);
        let params = MockRunParams {
            report_type: "activity.summary.1".to_string(),
        };

        let run = MockRun::create_with_options(
            &client,
            &params,
            &RequestOptions::new().idempotency_key("idem_1"),
        )
        .await
        .unwrap();
        assert_eq!(run.id, "run_2");

        let requests = client.backend().requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.path, "/v1/runs");
        assert_eq!(
            request.body.as_ref().unwrap().get("report_type"),
            Some("activity.summary.1")
        );
        assert_eq!(request.header("idempotency-key"), Some("idem_1"));
    }

    #[tokio::test]
    async fn test_delete_nested_resolves_parent_path() {
        let client = client(vec![Ok(ok(json!({"id": "di_1", "object": "discount", "deleted": true})))]);

        let deleted = MockRun::delete_nested(&client, "owner", "own_1").await.unwrap();
        assert!(deleted.deleted);

        let requests = client.backend().requests.lock().unwrap();
        assert_eq!(requests[0].path, "/v1/owners/own_1/run");
        assert_eq!(requests[0].http_method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn test_unsupported_operation_sends_nothing() {
        let client = client(vec![]);

        let error = MockRun::delete(&client, "run_1").await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed { resource: "MockRun", operation: "delete" }
        ));
        assert!(client.backend().requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_pages_through_backend() {
        let client = client(vec![
            Ok(ok(json!({"object": "list", "data": [{"id": "run_1"}, {"id": "run_2"}], "has_more": true}))),
            Ok(ok(json!({"object": "list", "data": [{"id": "run_3"}], "has_more": false}))),
        ]);

        let runs = MockRun::list(&client, &ListParams::new().limit(2))
            .collect_all()
            .await
            .unwrap();
        let ids: Vec<&str> = runs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["run_1", "run_2", "run_3"]);

        let requests = client.backend().requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        let second = requests[1].query.as_ref().unwrap();
        assert_eq!(second.get("limit"), Some("2"));
        assert_eq!(second.get("starting_after"), Some("run_2"));
    }

    #[tokio::test]
    async fn test_list_decode_error_stops_iteration() {
        let client = client(vec![Ok(ok(json!({"data": "nope"})))]);

        let mut iter = MockRun::list(&client, &ListParams::new());
        assert!(!iter.next().await);
        assert!(matches!(iter.err(), Some(ResourceError::Decode { .. })));
    }

    #[test]
    fn test_resolve_path_encodes_ids() {
        let url = resolve_path::<MockRun>(ResourceOperation::Get, &[("id", "a/b")]).unwrap();
        assert_eq!(url, "runs/a%2Fb");
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: RestResource>() {}
        assert_trait_bounds::<MockRun>();
        assert_eq!(MockRun::OBJECT, "mock.run");
    }
}
