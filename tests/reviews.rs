mod support;

use support::*;

async fn listing_with_review(app: &TestApp, client: &reqwest::Client) -> String {
    signup(app, client, "asha").await;
    create_listing(app, client, "Sea Hut", 400, "Goa").await;
    let index = page(client, app.url("/listings")).await;
    let id = listing_id(&index, "Sea Hut");

    let res = client
        .post(app.url(&format!("/listings/{id}/reviews")))
        .form(&[("rating", "5"), ("comment", "Lovely stay")])
        .send()
        .await
        .unwrap();
    assert!(res.status().is_redirection());
    assert_eq!(
        res.headers()["location"].to_str().unwrap(),
        format!("/listings/{id}")
    );
    id
}

#[tokio::test]
async fn review_appears_on_the_listing_with_its_author() {
    let app = spawn().await;
    let client = app.client();
    let id = listing_with_review(&app, &client).await;

    let show = page(&client, app.url(&format!("/listings/{id}"))).await;
    assert!(show.contains("Review Added Successfully"));
    assert!(show.contains("Lovely stay"));
    assert!(show.contains("asha"));
}

#[tokio::test]
async fn deleting_a_review_removes_the_row_and_the_reference() {
    let app = spawn().await;
    let client = app.client();
    let id = listing_with_review(&app, &client).await;

    let show = page(&client, app.url(&format!("/listings/{id}"))).await;
    let rid = review_id(&show, &id);

    let res = client
        .post(app.url(&format!("/listings/{id}/reviews/{rid}?_method=DELETE")))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_redirection());

    let show = page(&client, app.url(&format!("/listings/{id}"))).await;
    assert!(show.contains("Review Deleted Successfully"));
    assert!(!show.contains("Lovely stay"));
    assert!(!show.contains(&rid));
}

#[tokio::test]
async fn reviews_require_login() {
    let app = spawn().await;
    let owner = app.client();
    signup(&app, &owner, "asha").await;
    create_listing(&app, &owner, "Sea Hut", 400, "Goa").await;
    let index = page(&owner, app.url("/listings")).await;
    let id = listing_id(&index, "Sea Hut");

    let anon = app.client();
    let res = anon
        .post(app.url(&format!("/listings/{id}/reviews")))
        .form(&[("rating", "1"), ("comment", "drive-by")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["location"].to_str().unwrap(), "/login");

    let show = page(&owner, app.url(&format!("/listings/{id}"))).await;
    assert!(!show.contains("drive-by"));
}

#[tokio::test]
async fn reviewing_a_missing_listing_flashes_not_found() {
    let app = spawn().await;
    let client = app.client();
    signup(&app, &client, "asha").await;

    let ghost = uuid::Uuid::now_v7();
    let res = client
        .post(app.url(&format!("/listings/{ghost}/reviews")))
        .form(&[("rating", "4"), ("comment", "to nobody")])
        .send()
        .await
        .unwrap();
    assert!(res.status().is_redirection());
    assert_eq!(res.headers()["location"].to_str().unwrap(), "/listings");

    let body = page(&client, app.url("/listings")).await;
    assert!(body.contains("Listing Not Found"));
}
