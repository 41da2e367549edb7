use bson::doc;
use serde_json::json;

use crate::{
    InMemoryDocumentStore, MongoDocumentStore, Service,
    domain::{
        common::CoreError,
        document::{collections, ports::DocumentStore},
        server::{entities::InsertServerInput, ports::ServerService},
    },
};

// == Create Server Tests ==

#[tokio::test]
#[cfg(test)]
async fn test_create_server_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let input = InsertServerInput {
        name: "Test Server".to_string(),
        icon_url: Some("https://example.com/icon.png".to_string()),
        description: Some("A test server".to_string()),
        owner_id: Some("owner-1".to_string()),
        member_ids: vec!["owner-1".to_string(), "member-2".to_string()],
    };

    let server = service.create_server(input.clone()).await?;

    assert!(!server.id.is_empty(), "Expected a non-empty id");
    assert_eq!(server.name, "Test Server", "Expected correct server name");
    assert_eq!(server.icon_url, input.icon_url, "Expected correct icon URL");
    assert_eq!(
        server.description, input.description,
        "Expected correct description"
    );
    assert_eq!(server.owner_id, input.owner_id, "Expected correct owner id");
    assert_eq!(server.member_ids, input.member_ids, "Expected member ids kept in order");
    assert!(server.created_at.is_some(), "Expected created_at to be stamped");

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_server_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let server = service
        .create_server(InsertServerInput {
            name: "Test".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(server.icon_url, None);
    assert_eq!(server.description, None);
    assert_eq!(server.owner_id, None);
    assert!(server.member_ids.is_empty());

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_server_accepts_empty_name() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let server = service.create_server(InsertServerInput::default()).await?;

    assert!(!server.id.is_empty());
    assert_eq!(server.name, "");
    assert_eq!(service.list_servers().await?.len(), 1);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_server_store_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MongoDocumentStore::unconfigured());

    let error = service
        .create_server(InsertServerInput {
            name: "Test".to_string(),
            ..Default::default()
        })
        .await
        .expect_err("unconfigured store should fail");

    assert!(matches!(error, CoreError::StoreUnavailable(_)));

    Ok(())
}

// == List Server Tests ==

#[tokio::test]
#[cfg(test)]
async fn test_list_servers_after_create() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let created = service
        .create_server(InsertServerInput {
            name: "Listed".to_string(),
            description: Some("shown in list".to_string()),
            ..Default::default()
        })
        .await?;

    let servers = service.list_servers().await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0], created, "Listed server should equal the created one");

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_list_servers_empty() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let servers = service.list_servers().await?;
    assert!(servers.is_empty());

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_list_servers_keeps_unknown_fields() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryDocumentStore::new();
    let service = Service::new(store.clone());
    store
        .create_document(collections::SERVER, doc! { "name": "A", "region": "eu" })
        .await?;

    let servers = service.list_servers().await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name, "A");
    assert_eq!(servers[0].extra.get("region"), Some(&json!("eu")));
    assert!(servers[0].member_ids.is_empty());

    let body = serde_json::to_value(&servers[0])?;
    assert_eq!(body["region"], "eu");
    assert!(body.get("extra").is_none(), "Unknown fields are flattened");

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_list_servers_tolerates_missing_name() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryDocumentStore::new();
    let service = Service::new(store.clone());
    store
        .create_document(collections::SERVER, doc! { "description": "nameless" })
        .await?;

    let servers = service.list_servers().await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name, "");
    assert_eq!(servers[0].description.as_deref(), Some("nameless"));

    Ok(())
}
