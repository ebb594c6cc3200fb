//! Loads the data a resolved route needs and renders it as text.

use std::fmt;

use news_core::{router::CATCH_ALL_PARAM, ApiError, Payload, Resolved, RouteTable, View};

use crate::api::NewsApi;
use crate::transport::Transport;

const NO_PARAMS: [(&str, &str); 0] = [];

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home { categories: Payload },
    Category { id: String, details: Payload, articles: Payload },
    Search { query: String, results: Payload },
    NotFound { path: String },
}

/// Fetch everything the view selected by `resolved` displays.
///
/// The category view requests details and articles concurrently and waits
/// for both; the first error is returned unchanged.
pub async fn load<T: Transport>(api: &NewsApi<T>, resolved: &Resolved) -> Result<Page, ApiError> {
    let prop = |name: &str| resolved.props.get(name).cloned().unwrap_or_default();

    match resolved.view {
        View::Home => Ok(Page::Home {
            categories: api.list_categories().await?,
        }),
        View::Category => {
            let id = prop("id");
            let (details, articles) =
                tokio::join!(api.get_category_details(&id), api.list_articles_by_category(&id));
            Ok(Page::Category {
                details: details?,
                articles: articles?,
                id,
            })
        }
        View::Search => {
            let query = prop("queryText");
            let results = api.search(&query).await?;
            Ok(Page::Search { query, results })
        }
        View::NotFound => Ok(Page::NotFound {
            path: resolved.param(CATCH_ALL_PARAM).unwrap_or("/").to_string(),
        }),
    }
}

impl Page {
    /// Text rendering; links are emitted as hash locations from `routes`.
    pub fn display<'a>(&'a self, routes: &'a RouteTable) -> PageDisplay<'a> {
        PageDisplay { page: self, routes }
    }
}

pub struct PageDisplay<'a> {
    page: &'a Page,
    routes: &'a RouteTable,
}

impl fmt::Display for PageDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            Page::Home { categories } => {
                writeln!(f, "Categories")?;
                for category in items(categories) {
                    let link = id_of(category)
                        .and_then(|id| self.routes.href("category", [("id", id.as_str())]).ok())
                        .unwrap_or_default();
                    writeln!(f, "  {}  {link}", label(category))?;
                }
            }
            Page::Category { id, details, articles } => {
                writeln!(f, "Category {id}: {}", label(details))?;
                if let Some(description) = details.get("description").and_then(Payload::as_str) {
                    writeln!(f, "{description}")?;
                }
                writeln!(f, "Articles ({})", items(articles).len())?;
                for article in items(articles) {
                    writeln!(f, "  - {}", label(article))?;
                }
            }
            Page::Search { query, results } => {
                writeln!(f, "Search results for \"{query}\" ({})", items(results).len())?;
                for article in items(results) {
                    writeln!(f, "  - {}", label(article))?;
                }
            }
            Page::NotFound { path } => {
                writeln!(f, "Page not found: {path}")?;
                if let Ok(home) = self.routes.href("home", NO_PARAMS) {
                    writeln!(f, "Back to {home}")?;
                }
            }
        }
        Ok(())
    }
}

fn items(payload: &Payload) -> &[Payload] {
    payload.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn id_of(item: &Payload) -> Option<String> {
    match item.get("id")? {
        Payload::String(id) => Some(id.clone()),
        Payload::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn label(item: &Payload) -> String {
    ["name", "title"]
        .iter()
        .find_map(|key| item.get(key).and_then(Payload::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| item.to_string())
}
