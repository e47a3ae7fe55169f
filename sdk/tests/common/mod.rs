#![allow(dead_code)]

use gatehouse::http::client::HttpClient;
use gatehouse::http::HttpTransport;
use mockito::ServerGuard;
use serde_json::{json, Value};

pub const TOKEN: &str = "session-token";

pub async fn authenticated_client(server: &ServerGuard) -> HttpClient {
    let client = HttpClient::new(&server.url()).unwrap();
    client.set_access_token(Some(TOKEN.to_string())).await;
    client
}

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

pub fn success(data: Value) -> String {
    json!({ "code": 0, "data": data, "msg": null }).to_string()
}

pub fn user_json(id: u32, username: &str, is_active: bool) -> Value {
    json!({
        "id": id,
        "username": username,
        "nickname": "Alice",
        "avatar_uri": "https://x.com/a.png",
        "is_active": is_active,
        "created_at": "2024-01-01T10:00:00",
        "updated_at": "2024-01-01T10:00:00"
    })
}
