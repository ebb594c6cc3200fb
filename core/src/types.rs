//! Logical queries understood by the news API.
//!
//! # Design
//! Every query is one `Endpoint` variant; `NewsClient` turns any variant into
//! a request through a single code path, so adding a query never duplicates
//! URL construction. Response bodies stay opaque JSON: the views decide what
//! shape they expect.

/// A successfully parsed response body.
pub type Payload = serde_json::Value;

/// One logical query against the news API, borrowing its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Categories,
    CategoryDetails { category_id: &'a str },
    CategoryArticles { category_id: &'a str },
    AuthorDetails { author_id: &'a str },
    Search { query_text: &'a str },
}

/// A piece of an endpoint path: fixed text, or a named parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Fixed(&'static str),
    Param { name: &'static str, value: &'a str },
}

impl<'a> Endpoint<'a> {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Categories => "list_categories",
            Endpoint::CategoryDetails { .. } => "get_category_details",
            Endpoint::CategoryArticles { .. } => "list_articles_by_category",
            Endpoint::AuthorDetails { .. } => "get_author_details",
            Endpoint::Search { .. } => "search",
        }
    }

    pub(crate) fn segments(&self) -> Vec<Segment<'a>> {
        use Segment::{Fixed, Param};

        match *self {
            Endpoint::Categories => vec![Fixed("categories")],
            Endpoint::CategoryDetails { category_id } => vec![
                Fixed("category"),
                Param { name: "categoryId", value: category_id },
            ],
            Endpoint::CategoryArticles { category_id } => vec![
                Fixed("category"),
                Param { name: "categoryId", value: category_id },
                Fixed("articles"),
            ],
            Endpoint::AuthorDetails { author_id } => vec![
                Fixed("author"),
                Param { name: "authorId", value: author_id },
            ],
            Endpoint::Search { query_text } => vec![
                Fixed("search"),
                Param { name: "queryText", value: query_text },
            ],
        }
    }
}
