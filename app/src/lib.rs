//! Host side of the news browser.
//!
//! # Overview
//! `news_core` builds requests and resolves routes without I/O. This crate
//! supplies what a running client needs around it: configuration, logging,
//! a `Transport` that performs HTTP, the async `NewsApi` facade, and the
//! views that turn a location into rendered text.

pub mod api;
pub mod cli;
pub mod config;
pub mod telemetry;
pub mod transport;
pub mod views;

use anyhow::{Context, Result};
use news_core::{ApiError, NewsClient, Resolved, RouteTable};
use tracing::info;

pub use api::NewsApi;
pub use config::Config;
pub use transport::{ReqwestTransport, Transport};
pub use views::Page;

/// Route table plus API access, wired once at startup.
#[derive(Debug, Clone)]
pub struct App<T> {
    pub routes: RouteTable,
    pub api: NewsApi<T>,
}

impl App<ReqwestTransport> {
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let routes = RouteTable::news().context("invalid route table")?;
        let transport = ReqwestTransport::new().context("failed to create HTTP client")?;
        info!(base_url = %config.base_url, "news client ready");
        Ok(Self::new(routes, NewsApi::new(NewsClient::new(&config.base_url), transport)))
    }
}

impl<T: Transport> App<T> {
    pub fn new(routes: RouteTable, api: NewsApi<T>) -> Self {
        Self { routes, api }
    }

    pub fn resolve(&self, location: &str) -> Resolved {
        self.routes.resolve_location(location)
    }

    /// Resolve `location`, load its view and render it.
    pub async fn open(&self, location: &str) -> Result<String, ApiError> {
        let resolved = self.resolve(location);
        let page = views::load(&self.api, &resolved).await?;
        Ok(page.display(&self.routes).to_string())
    }
}
