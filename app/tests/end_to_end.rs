//! Opens locations against the mock server over real HTTP.

use news_app::{App, NewsApi, ReqwestTransport};
use news_core::{ApiError, NewsClient, RouteTable, View};
use pretty_assertions::assert_eq;

async fn start_server() -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { mock_server::run(listener).await });
    addr
}

fn app_for(base_url: &str) -> App<ReqwestTransport> {
    App::new(
        RouteTable::news().unwrap(),
        NewsApi::new(NewsClient::new(base_url), ReqwestTransport::new().unwrap()),
    )
}

#[tokio::test]
async fn browse_every_view() {
    let addr = start_server().await;
    let app = app_for(&format!("http://{addr}/api"));

    let home = app.open("#/").await.unwrap();
    assert_eq!(
        home,
        "Categories\n  World  #/category/1\n  Technology  #/category/2\n  Sports  #/category/3\n"
    );

    let category = app.open("#/category/2").await.unwrap();
    assert_eq!(
        category,
        "Category 2: Technology\nSoftware, hardware and the web\nArticles (2)\n  - Vue tutorial for beginners\n  - Rust 2024 edition ships\n"
    );

    let search = app.open("#/search/vue%20tutorial").await.unwrap();
    assert_eq!(search, "Search results for \"vue tutorial\" (1)\n  - Vue tutorial for beginners\n");

    let missing = app.open("#/nope").await.unwrap();
    assert_eq!(missing, "Page not found: /nope\nBack to #/\n");
}

#[tokio::test]
async fn author_details_and_separator_queries() {
    let addr = start_server().await;
    let app = app_for(&format!("http://{addr}/api"));

    let author = app.api.get_author_details("100").await.unwrap();
    assert_eq!(author["name"], "Ada Byline");

    let hits = app.api.search("tcp/ip?").await.unwrap();
    assert_eq!(hits, serde_json::json!([]));
}

#[tokio::test]
async fn unknown_category_surfaces_status() {
    let addr = start_server().await;
    let app = app_for(&format!("http://{addr}/api"));

    assert_eq!(app.resolve("#/category/99").view, View::Category);
    let err = app.open("#/category/99").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let app = app_for(&format!("http://127.0.0.1:{port}/api"));

    let err = app.api.list_categories().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err}");
}

#[tokio::test]
async fn dot_parameters_never_reach_another_endpoint() {
    let addr = start_server().await;
    let app = app_for(&format!("http://{addr}/api"));

    let err = app.api.search("..").await.unwrap_err();
    assert_eq!(err, ApiError::DotSegment { name: "queryText" });

    let err = app.api.list_articles_by_category("..").await.unwrap_err();
    assert_eq!(err, ApiError::DotSegment { name: "categoryId" });

    let err = app.open("#/search/.").await.unwrap_err();
    assert_eq!(err, ApiError::DotSegment { name: "queryText" });

    // Longer runs of dots are ordinary text and reach the search route.
    let hits = app.api.search("...").await.unwrap();
    assert_eq!(hits, serde_json::json!([]));
}
