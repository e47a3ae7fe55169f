mod common;

use common::TOKEN;
use gatehouse::client::SystemClient;
use gatehouse::error::GatehouseError;
use gatehouse::http::client::HttpClient;
use gatehouse::http::HttpTransport;
use gatehouse::users::login_user::LoginUser;
use gatehouse::users::logout_user::LogoutUser;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn login_should_store_token_for_following_requests() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/login")
        .match_body(Matcher::Json(json!({ "username": "admin", "password": "secret123" })))
        .with_status(200)
        .with_body(json!({ "code": 0, "data": TOKEN, "msg": null }).to_string())
        .create_async()
        .await;
    let logout = server
        .mock("GET", "/logout")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_body(json!({ "code": 0, "msg": "Logout successfully" }).to_string())
        .create_async()
        .await;

    let client = HttpClient::new(&server.url()).unwrap();
    let token = client
        .login_user(&LoginUser {
            username: "admin".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(token, TOKEN);
    assert!(client.is_authenticated().await);

    client.logout_user(&LogoutUser {}).await.unwrap();
    assert!(!client.is_authenticated().await);

    login.assert_async().await;
    logout.assert_async().await;
}

#[tokio::test]
async fn rejected_login_should_leave_client_unauthenticated() {
    let mut server = Server::new_async().await;
    let _login = server
        .mock("POST", "/login")
        .with_status(401)
        .with_body(json!({ "code": 40100, "msg": "Invalid credentials" }).to_string())
        .create_async()
        .await;

    let client = HttpClient::new(&server.url()).unwrap();
    let result = client
        .login_user(&LoginUser {
            username: "admin".to_string(),
            password: "wrong-password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(GatehouseError::HttpResponseError(401, _))));
    assert!(!client.is_authenticated().await);
}
