//! Async access to the news API.
//!
//! Each operation returns a future that resolves exactly once, to the parsed
//! payload or to the first error met while building, sending or parsing.
//! Futures are independent: several can be in flight at once and they may
//! complete in any order.

use news_core::{ApiError, Endpoint, NewsClient, Payload};
use tracing::{debug, warn};

use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct NewsApi<T> {
    client: NewsClient,
    transport: T,
}

impl<T: Transport> NewsApi<T> {
    pub fn new(client: NewsClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &NewsClient {
        &self.client
    }

    pub async fn list_categories(&self) -> Result<Payload, ApiError> {
        self.fetch(Endpoint::Categories).await
    }

    pub async fn get_category_details(&self, category_id: &str) -> Result<Payload, ApiError> {
        self.fetch(Endpoint::CategoryDetails { category_id }).await
    }

    pub async fn list_articles_by_category(&self, category_id: &str) -> Result<Payload, ApiError> {
        self.fetch(Endpoint::CategoryArticles { category_id }).await
    }

    pub async fn get_author_details(&self, author_id: &str) -> Result<Payload, ApiError> {
        self.fetch(Endpoint::AuthorDetails { author_id }).await
    }

    pub async fn search(&self, query_text: &str) -> Result<Payload, ApiError> {
        self.fetch(Endpoint::Search { query_text }).await
    }

    /// Build, execute and parse one request. Errors are logged and returned
    /// unchanged.
    pub async fn fetch(&self, endpoint: Endpoint<'_>) -> Result<Payload, ApiError> {
        let request = self.client.build(endpoint)?;
        let url = request.path.clone();
        debug!(endpoint = endpoint.name(), %url, "sending request");

        let result = match self.transport.execute(request).await {
            Ok(response) => self.client.parse_payload(response),
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            warn!(endpoint = endpoint.name(), %url, error = %err, "request failed");
        }
        result
    }
}
