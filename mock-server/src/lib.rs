use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub category_id: u32,
    pub author_id: u32,
    pub title: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u32,
    pub name: String,
    pub bio: String,
}

/// Read-only content served by the mock API.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
    pub authors: Vec<Author>,
}

impl Catalog {
    /// A small fixed data set for local development and tests.
    pub fn seeded() -> Self {
        let category = |id, name: &str, description: &str| Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
        };
        let article = |id, category_id, author_id, title: &str, summary: &str| Article {
            id,
            category_id,
            author_id,
            title: title.to_string(),
            summary: summary.to_string(),
        };
        let author = |id, name: &str, bio: &str| Author {
            id,
            name: name.to_string(),
            bio: bio.to_string(),
        };

        Self {
            categories: vec![
                category(1, "World", "International news"),
                category(2, "Technology", "Software, hardware and the web"),
                category(3, "Sports", "Results and analysis"),
            ],
            articles: vec![
                article(10, 1, 100, "Summit ends without agreement", "Leaders leave talks early."),
                article(11, 2, 101, "Vue tutorial for beginners", "Components, props and routing."),
                article(12, 2, 100, "Rust 2024 edition ships", "What changes for existing crates."),
                article(13, 3, 101, "Cup final goes to penalties", "A late equaliser forced extra time."),
            ],
            authors: vec![
                author(100, "Ada Byline", "Covers politics and technology."),
                author(101, "Sam Column", "Writes about sport and web development."),
            ],
        }
    }

    /// Articles whose title or summary contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<Article> {
        let needle = query.to_lowercase();
        self.articles
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&needle) || a.summary.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    app_with(Catalog::seeded())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(catalog);
    let api = Router::new()
        .route("/categories", get(list_categories))
        .route("/category/{id}", get(get_category))
        .route("/category/{id}/articles", get(list_category_articles))
        .route("/author/{id}", get(get_author))
        .route("/search/{query}", get(search))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_categories(State(db): State<Db>) -> Json<Vec<Category>> {
    Json(db.categories.clone())
}

async fn get_category(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Category>, StatusCode> {
    db.categories
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_category_articles(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<Article>>, StatusCode> {
    if !db.categories.iter().any(|c| c.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let articles = db.articles.iter().filter(|a| a.category_id == id).cloned().collect();
    Ok(Json(articles))
}

async fn get_author(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Author>, StatusCode> {
    db.authors
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn search(State(db): State<Db>, Path(query): Path<String>) -> Json<Vec<Article>> {
    debug!(%query, "search");
    Json(db.search(&query))
}
