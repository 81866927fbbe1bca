mod common;

use blog_service::services::BlogStore as _;
use common::TestApp;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

async fn create_blog(client: &Client, app: &TestApp, body: Value) -> Value {
    let response = client
        .post(format!("{}/api/blog", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, response.status());
    response.json().await.expect("Failed to parse JSON")
}

#[tokio::test]
async fn create_then_get_returns_submitted_fields() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let created = create_blog(
        &client,
        &app,
        json!({
            "userId": "u1",
            "title": "First post",
            "photo": "https://example.com/p.png",
            "tag": "health",
            "content": "Hello",
            "totalCmt": 2,
            "totalLike": 5,
            "postDate": "2024-01-15",
            "state": "published"
        }),
    )
    .await;

    assert_eq!(created["message"], "Blog created successfully");
    let post_id = created["postId"].as_str().expect("Missing postId");

    let response = client
        .get(format!("{}/api/blog/{}", app.address, post_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let blog: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(blog["postId"], post_id);
    assert_eq!(blog["userId"], "u1");
    assert_eq!(blog["title"], "First post");
    assert_eq!(blog["photo"], "https://example.com/p.png");
    assert_eq!(blog["tag"], "health");
    assert_eq!(blog["content"], "Hello");
    assert_eq!(blog["totalCmt"], 2);
    assert_eq!(blog["totalLike"], 5);
    assert_eq!(blog["postDate"], "2024-01-15");
    assert_eq!(blog["state"], "published");

    // Verify the stored document directly
    let stored = app
        .store
        .get(post_id)
        .await
        .unwrap()
        .expect("Blog not found in store");
    assert_eq!(stored.id, post_id);
    assert_eq!(stored.user_id.as_deref(), Some("u1"));
    assert_eq!(stored.title.as_deref(), Some("First post"));
    assert_eq!(stored.total_like, Some(5));
}

#[tokio::test]
async fn get_missing_blog_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/blog/no-such-id", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Blog not found");
}

#[tokio::test]
async fn list_on_empty_collection_returns_empty_array() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/blog", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_returns_created_blogs() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    create_blog(&client, &app, json!({ "title": "One" })).await;
    create_blog(&client, &app, json!({ "title": "Two" })).await;

    let response = client
        .get(format!("{}/api/blog", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let blogs: Vec<Value> = response.json().await.expect("Failed to parse JSON");
    assert_eq!(blogs.len(), 2);

    let mut titles: Vec<&str> = blogs
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["One", "Two"]);
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let created = create_blog(
        &client,
        &app,
        json!({ "userId": "u1", "title": "A", "totalLike": 0 }),
    )
    .await;
    let post_id = created["postId"].as_str().unwrap();

    let response = client
        .put(format!("{}/api/blog/{}", app.address, post_id))
        .json(&json!({ "totalLike": 1 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let merged: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(merged["postId"], post_id);
    assert_eq!(merged["totalLike"], 1);
    assert_eq!(merged["title"], "A");
    assert_eq!(merged["userId"], "u1");
}

#[tokio::test]
async fn update_missing_blog_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/blog/no-such-id", app.address))
        .json(&json!({ "title": "B" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let created = create_blog(&client, &app, json!({ "title": "Short-lived" })).await;
    let post_id = created["postId"].as_str().unwrap();

    let response = client
        .delete(format!("{}/api/blog/{}", app.address, post_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Blog deleted successfully");

    // Gone from the store as well
    assert!(app.store.get(post_id).await.unwrap().is_none());

    let response = client
        .get(format!("{}/api/blog/{}", app.address, post_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn delete_missing_blog_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/blog/no-such-id", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn create_with_unknown_field_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/blog", app.address))
        .json(&json!({ "title": "A", "author": "u1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
}

// Full lifecycle: create, read, partial update, delete, read again.
#[tokio::test]
async fn blog_lifecycle() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let created = create_blog(
        &client,
        &app,
        json!({ "title": "A", "userId": "u1", "totalLike": 0 }),
    )
    .await;
    let post_id = created["postId"].as_str().unwrap().to_string();

    let blog: Value = client
        .get(format!("{}/api/blog/{}", app.address, post_id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(blog["postId"], post_id.as_str());
    assert_eq!(blog["title"], "A");
    assert_eq!(blog["userId"], "u1");
    assert_eq!(blog["totalLike"], 0);
    // Unsupplied fields are absent, not null
    assert!(blog.get("content").is_none());
    assert!(blog.get("photo").is_none());

    let merged: Value = client
        .put(format!("{}/api/blog/{}", app.address, post_id))
        .json(&json!({ "totalLike": 1 }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(merged["totalLike"], 1);
    assert_eq!(merged["title"], "A");

    let response = client
        .delete(format!("{}/api/blog/{}", app.address, post_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let response = client
        .get(format!("{}/api/blog/{}", app.address, post_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}
