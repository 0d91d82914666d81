mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_owner_and_reader_walkthrough() {
    let app = TestApp::spawn().await;
    let (owner_id, owner_token) = app.register_and_login("name1", "password1").await;
    let (_, reader_token) = app.register_and_login("name2", "password2").await;

    let post_id = app.create_post(&owner_token, "test text").await;
    let post = app.get_post(post_id).await;
    assert_eq!(post["data"]["owner"]["id"], owner_id);
    assert_eq!(post["data"]["likes_count"], 0);
    assert_eq!(post["data"]["dislikes_count"], 0);

    // Reader likes
    let response = app
        .post_authenticated(&format!("/api/posts/{post_id}/like"), &reader_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.get_post(post_id).await["data"]["likes_count"], 1);

    // Owner cannot like their own post
    let response = app
        .post_authenticated(&format!("/api/posts/{post_id}/like"), &owner_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.get_post(post_id).await["data"]["likes_count"], 1);

    // Owner edits
    let response = app
        .patch_authenticated(&format!("/api/posts/{post_id}"), &owner_token)
        .json(&json!({ "text": "new text" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.get_post(post_id).await["data"]["text"], "new text");

    // Reader cannot edit, and is told the post does not exist
    let response = app
        .patch_authenticated(&format!("/api/posts/{post_id}"), &reader_token)
        .json(&json!({ "text": "hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get_post(post_id).await["data"]["text"], "new text");
}

#[tokio::test]
async fn test_create_post_response() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register_and_login("name1", "password1").await;

    let response = app
        .post_authenticated("/api/posts", &token)
        .json(&json!({ "text": "test text" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["info"], "Created post 1");
}

#[tokio::test]
async fn test_create_post_accepts_empty_text() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register_and_login("name1", "password1").await;

    let post_id = app.create_post(&token, "").await;

    assert_eq!(app.get_post(post_id).await["data"]["text"], "");
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/posts")
        .json(&json!({ "text": "test text" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/api/posts")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_by_owner() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register_and_login("name1", "password1").await;
    let post_id = app.create_post(&token, "test text").await;

    let response = app
        .delete_authenticated(&format!("/api/posts/{post_id}"), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], post_id);
    assert_eq!(body["data"]["info"], format!("Post {post_id} deleted"));

    let response = app
        .get(&format!("/api/posts/{post_id}"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting twice reports the post as missing
    let response = app
        .delete_authenticated(&format!("/api/posts/{post_id}"), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_by_other_user_is_not_found() {
    let app = TestApp::spawn().await;
    let (_, owner_token) = app.register_and_login("name1", "password1").await;
    let (_, other_token) = app.register_and_login("name2", "password2").await;
    let post_id = app.create_post(&owner_token, "test text").await;

    let response = app
        .delete_authenticated(&format!("/api/posts/{post_id}"), &other_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get_post(post_id).await["data"]["text"], "test text");
}

#[tokio::test]
async fn test_edit_missing_post() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register_and_login("name1", "password1").await;

    let response = app
        .patch_authenticated("/api/posts/99", &token)
        .json(&json!({ "text": "new text" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Post 99 not found");
}

#[tokio::test]
async fn test_reactions_accumulate() {
    let app = TestApp::spawn().await;
    let (_, owner_token) = app.register_and_login("name1", "password1").await;
    let (_, reader_token) = app.register_and_login("name2", "password2").await;
    let post_id = app.create_post(&owner_token, "test text").await;

    for action in ["like", "like", "dislike"] {
        let response = app
            .post_authenticated(&format!("/api/posts/{post_id}/{action}"), &reader_token)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let post = app.get_post(post_id).await;
    assert_eq!(post["data"]["likes_count"], 2);
    assert_eq!(post["data"]["dislikes_count"], 1);
}

#[tokio::test]
async fn test_dislike_own_post_rejected() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register_and_login("name1", "password1").await;
    let post_id = app.create_post(&token, "test text").await;

    let response = app
        .post_authenticated(&format!("/api/posts/{post_id}/dislike"), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        format!("Cannot dislike your own post {post_id}")
    );
    assert_eq!(app.get_post(post_id).await["data"]["dislikes_count"], 0);
}

#[tokio::test]
async fn test_react_to_missing_post() {
    let app = TestApp::spawn().await;
    let (_, token) = app.register_and_login("name1", "password1").await;

    let response = app
        .post_authenticated("/api/posts/7/like", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_posts_and_mine() {
    let app = TestApp::spawn().await;
    let (alice_id, alice_token) = app.register_and_login("alice", "password1").await;
    let (_, bob_token) = app.register_and_login("bob", "password2").await;

    app.create_post(&alice_token, "first").await;
    app.create_post(&bob_token, "second").await;
    app.create_post(&alice_token, "third").await;

    let response = app
        .get("/api/posts")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let posts = body["data"].as_array().unwrap();
    let texts: Vec<_> = posts.iter().map(|p| p["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert_eq!(posts[1]["owner"]["username"], "bob");
    assert_eq!(posts[1]["owner"]["email"], "bob@example.com");

    let response = app
        .get_authenticated("/api/posts/mine", &alice_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let mine = body["data"].as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|p| p["owner"]["id"] == alice_id));
}

#[tokio::test]
async fn test_get_post_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/posts/5")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_post_id() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/posts/abc")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 400);
    assert!(body["data"]["message"].as_str().unwrap().contains("abc"));
}
