//! Stateless HTTP request builder and response parser for the news API.
//!
//! # Design
//! `NewsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each query has a `build_*` method that produces an `HttpRequest`;
//! every response goes through `parse_payload`. The caller executes the
//! actual HTTP round-trip, keeping the core deterministic and free of I/O.
//!
//! Path parameters are percent-encoded as single segments, so a category id
//! or a search text containing `/` or `?` cannot change which endpoint is hit.
//! A bare `.` or `..` is rejected, since no encoding keeps it a plain segment.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Endpoint, Payload, Segment};

/// Synchronous, stateless client for the news API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsClient {
    base_url: String,
}

impl NewsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_categories(&self) -> Result<HttpRequest, ApiError> {
        self.build(Endpoint::Categories)
    }

    pub fn build_get_category_details(&self, category_id: &str) -> Result<HttpRequest, ApiError> {
        self.build(Endpoint::CategoryDetails { category_id })
    }

    pub fn build_list_articles_by_category(&self, category_id: &str) -> Result<HttpRequest, ApiError> {
        self.build(Endpoint::CategoryArticles { category_id })
    }

    pub fn build_get_author_details(&self, author_id: &str) -> Result<HttpRequest, ApiError> {
        self.build(Endpoint::AuthorDetails { author_id })
    }

    pub fn build_search(&self, query_text: &str) -> Result<HttpRequest, ApiError> {
        self.build(Endpoint::Search { query_text })
    }

    /// Build the request for any endpoint.
    pub fn build(&self, endpoint: Endpoint<'_>) -> Result<HttpRequest, ApiError> {
        let mut path = self.base_url.clone();
        for segment in endpoint.segments() {
            path.push('/');
            match segment {
                Segment::Fixed(text) => path.push_str(text),
                Segment::Param { name, value } => {
                    if value.is_empty() {
                        return Err(ApiError::EmptySegment { name });
                    }
                    // Escaping does not help here: `%2E` is still a dot to URL parsers.
                    if matches!(value, "." | "..") {
                        return Err(ApiError::DotSegment { name });
                    }
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        debug!(endpoint = endpoint.name(), url = %path, "built request");
        Ok(HttpRequest::get(path))
    }

    /// Turn a response into its JSON payload.
    ///
    /// Any 2xx is success; an empty body yields `null`. Every other status is
    /// returned as `HttpStatus` without further interpretation.
    pub fn parse_payload(&self, response: HttpResponse) -> Result<Payload, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Payload::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn client() -> NewsClient {
        NewsClient::new("http://localhost:9000/api")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_categories_produces_correct_request() {
        let req = client().build_list_categories().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:9000/api/categories");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_category_details_is_literal_concatenation() {
        let req = client().build_get_category_details("42").unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:9000/api/category/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_articles_by_category_appends_articles() {
        let req = client().build_list_articles_by_category("tech").unwrap();
        assert_eq!(req.path, "http://localhost:9000/api/category/tech/articles");
    }

    #[test]
    fn build_get_author_details_produces_correct_request() {
        let req = client().build_get_author_details("jane-doe").unwrap();
        assert_eq!(req.path, "http://localhost:9000/api/author/jane-doe");
    }

    #[test]
    fn build_search_escapes_separators() {
        let req = client().build_search("a/b?c d").unwrap();
        assert_eq!(req.path, "http://localhost:9000/api/search/a%2Fb%3Fc%20d");

        let req = client().build_search("...").unwrap();
        assert_eq!(req.path, "http://localhost:9000/api/search/...");
    }

    #[test]
    fn build_matches_generic_endpoint() {
        let c = client();
        assert_eq!(
            c.build(Endpoint::AuthorDetails { author_id: "7" }).unwrap(),
            c.build_get_author_details("7").unwrap()
        );
    }

    #[test]
    fn empty_parameter_is_rejected() {
        let err = client().build_get_category_details("").unwrap_err();
        assert_eq!(err, ApiError::EmptySegment { name: "categoryId" });

        let err = client().build_search("").unwrap_err();
        assert_eq!(err, ApiError::EmptySegment { name: "queryText" });
    }

    #[test]
    fn dot_segments_are_rejected() {
        let c = client();
        assert_eq!(c.build_search("..").unwrap_err(), ApiError::DotSegment { name: "queryText" });
        assert_eq!(c.build_search(".").unwrap_err(), ApiError::DotSegment { name: "queryText" });
        assert_eq!(
            c.build_list_articles_by_category("..").unwrap_err(),
            ApiError::DotSegment { name: "categoryId" }
        );
        assert_eq!(
            c.build_get_author_details(".").unwrap_err(),
            ApiError::DotSegment { name: "authorId" }
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = NewsClient::new("http://localhost:9000/api/");
        let req = client.build_list_categories().unwrap();
        assert_eq!(req.path, "http://localhost:9000/api/categories");
    }

    #[test]
    fn parse_payload_success() {
        let payload = client()
            .parse_payload(response(200, r#"[{"id":1,"name":"World"}]"#))
            .unwrap();
        assert_eq!(payload[0]["name"], "World");
    }

    #[test]
    fn parse_payload_accepts_any_2xx() {
        let payload = client().parse_payload(response(203, r#"{"ok":true}"#)).unwrap();
        assert_eq!(payload["ok"], true);
    }

    #[test]
    fn parse_payload_empty_body_is_null() {
        let payload = client().parse_payload(response(204, "")).unwrap();
        assert!(payload.is_null());
    }

    #[test]
    fn parse_payload_forwards_client_and_server_errors_alike() {
        let not_found = client().parse_payload(response(404, "missing")).unwrap_err();
        assert_eq!(
            not_found,
            ApiError::HttpStatus {
                status: 404,
                body: "missing".to_string()
            }
        );

        let server = client().parse_payload(response(500, "boom")).unwrap_err();
        assert!(matches!(server, ApiError::HttpStatus { status: 500, .. }));
        assert_eq!(server.status(), Some(500));
    }

    #[test]
    fn parse_payload_bad_json() {
        let err = client().parse_payload(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
