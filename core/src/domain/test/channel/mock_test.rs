use crate::{
    InMemoryDocumentStore, Service,
    domain::{
        channel::{
            entities::{ChannelType, CreateChannelRequest, InsertChannelInput},
            ports::ChannelService,
        },
    },
};

#[tokio::test]
#[cfg(test)]
async fn test_create_channel_applies_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let request: CreateChannelRequest = serde_json::from_value(serde_json::json!({
        "name": "general"
    }))?;
    let channel = service
        .create_channel(request.into_input("server-1".to_string()))
        .await?;

    assert!(!channel.id.is_empty());
    assert_eq!(channel.server_id, "server-1");
    assert_eq!(channel.name, "general");
    assert_eq!(channel.kind, ChannelType::Text);
    assert_eq!(channel.topic, None);
    assert!(!channel.is_private);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_channel_ignores_body_server_id() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let request: CreateChannelRequest = serde_json::from_value(serde_json::json!({
        "name": "voice-lounge",
        "type": "voice",
        "server_id": "from-body",
        "is_private": true
    }))?;
    let channel = service
        .create_channel(request.into_input("from-path".to_string()))
        .await?;

    assert_eq!(channel.server_id, "from-path");
    assert_eq!(channel.kind, ChannelType::Voice);
    assert!(channel.is_private);

    let listed = service.list_channels("from-path").await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].server_id, "from-path");
    assert!(service.list_channels("from-body").await?.is_empty());

    Ok(())
}

#[test]
fn test_channel_type_rejects_unknown_value() {
    let result = serde_json::from_value::<CreateChannelRequest>(serde_json::json!({
        "name": "general",
        "type": "video"
    }));
    assert!(result.is_err(), "Only text, voice, announcement and stage are allowed");
}

#[tokio::test]
#[cfg(test)]
async fn test_list_channels_filters_by_server() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    for (server_id, name) in [("a", "one"), ("b", "two"), ("a", "three")] {
        service
            .create_channel(InsertChannelInput {
                server_id: server_id.to_string(),
                name: name.to_string(),
                kind: ChannelType::Announcement,
                ..Default::default()
            })
            .await?;
    }

    let names: Vec<String> = service
        .list_channels("a")
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["one".to_string(), "three".to_string()]);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_channel_accepts_empty_name() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryDocumentStore::new());

    let channel = service
        .create_channel(InsertChannelInput {
            server_id: "s".to_string(),
            name: "".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(channel.name, "");
    assert_eq!(channel.server_id, "s");

    Ok(())
}
