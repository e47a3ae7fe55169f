mod common;

use common::{authenticated_client, success};
use gatehouse::client::{GroupClient, PermissionClient};
use gatehouse::error::GatehouseError;
use gatehouse::groups::create_group::CreateGroup;
use gatehouse::groups::delete_groups::DeleteGroups;
use gatehouse::groups::get_groups::GetGroups;
use gatehouse::models::page::PageRequest;
use gatehouse::permissions::create_permission::CreatePermission;
use gatehouse::permissions::delete_permissions::DeletePermissions;
use gatehouse::permissions::get_permissions::GetPermissions;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn get_permissions_should_use_backend_defaults_for_first_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/permissions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "20".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "code": 0,
                "data": [{ "id": 1, "name": "users.read" }, { "id": 2, "name": "users.write" }],
                "msg": null,
                "total": 12
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = authenticated_client(&server).await;
    let page = client
        .get_permissions(&GetPermissions::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, 12);
}

#[tokio::test]
async fn create_permission_should_post_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/permissions")
        .match_body(Matcher::Json(json!({ "name": "users.read" })))
        .with_status(200)
        .with_body(success(json!({ "id": 3, "name": "users.read" })))
        .create_async()
        .await;

    let client = authenticated_client(&server).await;
    let permission = client
        .create_permission(&CreatePermission {
            name: "users.read".to_string(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(permission.id, 3);
}

#[tokio::test]
async fn delete_permissions_should_send_ids_in_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/permissions")
        .match_body(Matcher::Json(json!({ "ids": [3, 4] })))
        .with_status(200)
        .with_body(json!({ "code": 0, "msg": null }).to_string())
        .create_async()
        .await;

    let client = authenticated_client(&server).await;
    client
        .delete_permissions(&DeletePermissions { ids: vec![3, 4] })
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn groups_should_follow_the_same_contract() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/v1/groups")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), "10".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(success(json!([{ "id": 11, "name": "admins" }])))
        .create_async()
        .await;
    let create = server
        .mock("POST", "/v1/groups")
        .match_body(Matcher::Json(json!({ "name": "auditors" })))
        .with_status(200)
        .with_body(success(json!({ "id": 12, "name": "auditors" })))
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v1/groups")
        .match_body(Matcher::Json(json!({ "ids": [11] })))
        .with_status(200)
        .with_body(json!({ "code": 0 }).to_string())
        .create_async()
        .await;

    let client = authenticated_client(&server).await;
    let page = client
        .get_groups(&GetGroups::new(PageRequest::new(2, 10)))
        .await
        .unwrap();
    assert_eq!(page.data[0].name, "admins");
    let group = client
        .create_group(&CreateGroup {
            name: "auditors".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(group.id, 12);
    client
        .delete_groups(&DeleteGroups { ids: vec![11] })
        .await
        .unwrap();

    list.assert_async().await;
    create.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn short_group_name_should_be_rejected_locally() {
    let server = Server::new_async().await;
    let client = authenticated_client(&server).await;

    let result = client
        .create_group(&CreateGroup {
            name: "ab".to_string(),
        })
        .await;
    assert!(matches!(result, Err(GatehouseError::InvalidResourceName)));
}
