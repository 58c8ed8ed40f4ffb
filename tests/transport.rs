//
//  backlog-client
//  tests/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Transport behaviour against a mock Backlog server.

use backlog_client::api::common::Params;
use backlog_client::{BacklogClient, ServiceConfig};
use mockito::{Matcher, Server, ServerGuard};
use reqwest::Method;
use tempfile::TempDir;

const API_KEY: &str = "k123";

async fn setup() -> (ServerGuard, BacklogClient) {
    let server = Server::new_async().await;
    let config = ServiceConfig::with_base_url(&format!("{}/api/v2/", server.url()), API_KEY).unwrap();
    let client = BacklogClient::new(&config).unwrap();
    (server, client)
}

fn api_key() -> Matcher {
    Matcher::UrlEncoded("apiKey".into(), API_KEY.into())
}

#[tokio::test]
async fn test_get_sends_api_key_and_query() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/api/v2/issues")
        .match_query(Matcher::AllOf(vec![
            api_key(),
            Matcher::UrlEncoded("projectId[]".into(), "1".into()),
            Matcher::UrlEncoded("projectId[]".into(), "2".into()),
            Matcher::UrlEncoded("attachment".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 1}]"#)
        .create_async()
        .await;

    let mut params = Params::new();
    params.insert_list("projectId", [1u64, 2]);
    params.insert("attachment", true);

    let response = client.send(Method::GET, "issues", &params).await.unwrap();
    mock.assert_async().await;

    assert!(response.is_success());
    let body = response.json_value().unwrap();
    assert_eq!(body[0]["id"], 1);
}

#[tokio::test]
async fn test_post_sends_form_body() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/api/v2/projects/DEV/categories")
        .match_query(api_key())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::UrlEncoded("name".into(), "UI".into()))
        .with_status(201)
        .with_body(r#"{"id": 9, "name": "UI"}"#)
        .create_async()
        .await;

    let response = client
        .post("projects/DEV/categories", &Params::new().with("name", "UI"))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn test_delete_sends_form_body() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("DELETE", "/api/v2/projects/DEV/users")
        .match_query(api_key())
        .match_body(Matcher::UrlEncoded("userId".into(), "5".into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client
        .delete("projects/DEV/users", &Params::new().with("userId", 5u64))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_returned() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/api/v2/projects/NOPE")
        .match_query(api_key())
        .with_status(404)
        .with_body(r#"{"errors":[{"message":"No project.","code":6,"moreInfo":""}]}"#)
        .create_async()
        .await;

    let response = client.get("projects/NOPE", &Params::new()).await.unwrap();
    mock.assert_async().await;

    assert!(!response.is_success());
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(response.error_message().as_deref(), Some("No project."));
}

#[tokio::test]
async fn test_download_uses_content_disposition() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/api/v2/issues/DEV-1/attachments/8")
        .match_query(api_key())
        .with_status(200)
        .with_header("content-disposition", "attachment; filename*=UTF-8''%E8%B3%87%E6%96%99.txt")
        .with_body("hello")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let download = client
        .download_to(dir.path(), "issues/DEV-1/attachments/8", &Params::new())
        .await
        .unwrap();
    mock.assert_async().await;

    let path = download.path.expect("file should be saved");
    assert_eq!(path, dir.path().join("資料.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
}

#[tokio::test]
async fn test_download_falls_back_to_url_segment() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/api/v2/space/image")
        .match_query(api_key())
        .with_status(200)
        .with_body(vec![0x89, 0x50, 0x4e, 0x47])
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let download = client
        .download_to(dir.path(), "space/image", &Params::new())
        .await
        .unwrap();

    assert!(download.is_saved());
    assert_eq!(download.path.unwrap(), dir.path().join("image"));
}

#[tokio::test]
async fn test_download_error_writes_nothing() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/api/v2/users/99/icon")
        .match_query(api_key())
        .with_status(404)
        .with_body(r#"{"errors":[{"message":"No user."}]}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out");
    let download = client
        .download_to(&target, "users/99/icon", &Params::new())
        .await
        .unwrap();

    assert!(download.path.is_none());
    assert_eq!(download.response.status().as_u16(), 404);
    assert!(!target.exists());
}

#[tokio::test]
async fn test_upload_is_multipart() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/api/v2/space/attachment")
        .match_query(api_key())
        .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
        .match_body(Matcher::Regex(r#"name="file"; filename="notes.txt""#.into()))
        .with_status(200)
        .with_body(r#"{"id": 42, "name": "notes.txt", "size": 5}"#)
        .create_async()
        .await;

    let response = client
        .upload("space/attachment", "file", "notes.txt", b"hello".to_vec())
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(response.json_value().unwrap()["id"], 42);
}
