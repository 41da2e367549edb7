use bson::doc;

use crate::{
    DocumentStore, InMemoryDocumentStore, MongoDocumentStore, Service,
    domain::{
        channel::ports::ChannelService,
        common::CoreError,
        document::collections,
        message::ports::MessageService,
        seed::{
            entities::{SEED_AUTHOR_ID, SEED_AUTHOR_NAME, SEED_CHANNEL_NAMES, SEED_SERVER_NAME},
            ports::SeedService,
        },
        server::{entities::InsertServerInput, ports::ServerService},
    },
};

#[tokio::test]
#[cfg(test)]
async fn test_seed_empty_store() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let result = service.seed().await?;

    assert_eq!(result.server.name, SEED_SERVER_NAME);
    assert_eq!(
        result.server.description.as_deref(),
        Some("A modern, minimal community")
    );
    let names: Vec<&str> = result.channels.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, SEED_CHANNEL_NAMES.to_vec());
    for channel in &result.channels {
        assert_eq!(channel.server_id, result.server.id);
        assert_eq!(
            channel.topic.as_deref(),
            Some(format!("Welcome to #{}", channel.name).as_str())
        );
    }

    let messages = service.list_messages(&result.channels[0].id, 50).await?;
    assert_eq!(messages.len(), 3);
    for message in &messages {
        assert_eq!(message.author_id, SEED_AUTHOR_ID);
        assert_eq!(message.author_name, SEED_AUTHOR_NAME);
    }

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_seed_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryDocumentStore::new();
    let service = Service::new(store.clone());

    let first = service.seed().await?;
    let second = service.seed().await?;

    assert_eq!(first.server.id, second.server.id);
    assert_eq!(first.channels, second.channels);

    let named = store
        .count_documents(collections::SERVER, doc! { "name": SEED_SERVER_NAME })
        .await?;
    assert_eq!(named, 1, "Exactly one seeded server");
    assert_eq!(
        store
            .count_documents(collections::CHANNEL, Default::default())
            .await?,
        4
    );
    let messages = service.list_messages(&second.channels[0].id, 50).await?;
    assert_eq!(messages.len(), 3);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_seed_reuses_existing_server() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let existing = service
        .create_server(InsertServerInput {
            name: "Existing".to_string(),
            ..Default::default()
        })
        .await?;

    let result = service.seed().await?;

    assert_eq!(result.server, existing);
    assert_eq!(service.list_servers().await?.len(), 1);
    assert_eq!(service.list_channels(&existing.id).await?.len(), 4);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_seed_keeps_existing_channels() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());
    let server = service
        .create_server(InsertServerInput {
            name: "Existing".to_string(),
            ..Default::default()
        })
        .await?;
    let custom: crate::domain::channel::entities::CreateChannelRequest =
        serde_json::from_value(serde_json::json!({ "name": "lobby" }))?;
    service
        .create_channel(custom.into_input(server.id.clone()))
        .await?;

    let result = service.seed().await?;

    assert_eq!(result.channels.len(), 1);
    assert_eq!(result.channels[0].name, "lobby");
    assert_eq!(
        service.list_messages(&result.channels[0].id, 50).await?.len(),
        3
    );

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_seed_store_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MongoDocumentStore::unconfigured());

    let error = service.seed().await.expect_err("seed needs a store");
    assert!(matches!(error, CoreError::StoreUnavailable(_)));

    Ok(())
}
