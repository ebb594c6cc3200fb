use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Article, Author, Catalog, Category};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap()
}

// --- categories ---

#[tokio::test]
async fn list_categories_returns_seeded_rows() {
    let resp = get("/api/categories").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let categories: Vec<Category> = body_json(resp).await;
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["World", "Technology", "Sports"]);
}

#[tokio::test]
async fn list_categories_empty_catalog() {
    let resp = app_with(Catalog::default())
        .oneshot(Request::builder().uri("/api/categories").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let categories: Vec<Category> = body_json(resp).await;
    assert!(categories.is_empty());
}

#[tokio::test]
async fn get_category_details() {
    let resp = get("/api/category/2").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let category: Category = body_json(resp).await;
    assert_eq!(category.name, "Technology");
}

#[tokio::test]
async fn get_category_not_found() {
    let resp = get("/api/category/99").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_category_bad_id_returns_400() {
    let resp = get("/api/category/not-a-number").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- articles ---

#[tokio::test]
async fn list_articles_by_category() {
    let resp = get("/api/category/2/articles").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let articles: Vec<Article> = body_json(resp).await;
    let ids: Vec<_> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, [11, 12]);
}

#[tokio::test]
async fn list_articles_of_missing_category_is_404() {
    let resp = get("/api/category/99/articles").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- authors ---

#[tokio::test]
async fn get_author_details() {
    let resp = get("/api/author/101").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let author: Author = body_json(resp).await;
    assert_eq!(author.name, "Sam Column");
}

#[tokio::test]
async fn get_author_not_found() {
    let resp = get("/api/author/1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- search ---

#[tokio::test]
async fn search_decodes_path_segment() {
    let resp = get("/api/search/vue%20tutorial").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let articles: Vec<Article> = body_json(resp).await;
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, 11);
}

#[tokio::test]
async fn search_with_encoded_slash_stays_on_search_route() {
    let resp = get("/api/search/a%2Fb").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let articles: Vec<Article> = body_json(resp).await;
    assert!(articles.is_empty());
}

#[tokio::test]
async fn unknown_path_is_404() {
    let resp = get("/api/nonexistent").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
