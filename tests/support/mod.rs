#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;
use wanderlust::{config::Config, db, AppState};

pub struct TestApp {
    pub base: String,
    _uploads: TempDir,
}

impl TestApp {
    // fresh cookie jar per client, one browser each; redirects are
    // never followed so they can be asserted on
    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

pub async fn spawn() -> TestApp {
    let uploads = TempDir::new().unwrap();
    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::init(&db_pool).await.unwrap();

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        uploads_dir: uploads.path().to_path_buf(),
    };
    let app = wanderlust::router(AppState { db_pool, config });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base: format!("http://{addr}"),
        _uploads: uploads,
    }
}

pub async fn signup(app: &TestApp, client: &reqwest::Client, username: &str) {
    let res = client
        .post(app.url("/signup"))
        .form(&[
            ("username", username),
            ("email", "someone@example.com"),
            ("password", "wanderpass"),
        ])
        .send()
        .await
        .unwrap();
    assert!(res.status().is_redirection());
}

pub fn listing_form(title: &str, price: i64, location: &str) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new()
        .text("title", title.to_string())
        .text("description", "A lovely place to stay".to_string())
        .text("price", price.to_string())
        .text("location", location.to_string())
        .text("country", "India".to_string())
}

pub async fn create_listing(
    app: &TestApp,
    client: &reqwest::Client,
    title: &str,
    price: i64,
    location: &str,
) {
    let res = client
        .post(app.url("/listings"))
        .multipart(listing_form(title, price, location))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_redirection());
}

pub async fn page(client: &reqwest::Client, url: String) -> String {
    client
        .get(url)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap()
}

// pulls the listing id out of the index page by matching the card link
pub fn listing_id(index_body: &str, title: &str) -> String {
    const MARKER: &str = "href=\"/listings/";
    for (idx, _) in index_body.match_indices(MARKER) {
        let rest = &index_body[idx + MARKER.len()..];
        let Some(quote) = rest.find('"') else { continue };
        let Some(close) = rest.find("</a>") else {
            continue;
        };
        if rest[..close].contains(&format!(">{title}<")) {
            return rest[..quote].to_string();
        }
    }
    panic!("no listing titled {title} on the index page");
}

// pulls a review id out of the show page from its delete form action
pub fn review_id(show_body: &str, listing_id: &str) -> String {
    let marker = format!("action=\"/listings/{listing_id}/reviews/");
    let idx = show_body
        .find(&marker)
        .expect("no review delete form on the page");
    let rest = &show_body[idx + marker.len()..];
    rest.split('?').next().unwrap().to_string()
}
