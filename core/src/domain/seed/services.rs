use bson::{Document, doc};

use crate::domain::{
    channel::{
        entities::{ChannelType, InsertChannelInput},
        ports::ChannelService,
    },
    common::{CoreError, services::Service},
    document::{collections, ports::DocumentStore},
    message::{entities::InsertMessageInput, ports::MessageService},
    seed::{
        entities::{
            SEED_AUTHOR_ID, SEED_AUTHOR_NAME, SEED_CHANNEL_NAMES, SEED_MESSAGES,
            SEED_SERVER_DESCRIPTION, SEED_SERVER_NAME, SeedResult, seed_channel_topic,
        },
        ports::SeedService,
    },
    server::{
        entities::{InsertServerInput, Server},
        ports::ServerService,
    },
};

impl<D> SeedService for Service<D>
where
    D: DocumentStore,
{
    async fn seed(&self) -> Result<SeedResult, CoreError> {
        let server = match self
            .fetch_first::<Server>(collections::SERVER, Document::new())
            .await?
        {
            Some(server) => server,
            None => {
                self.create_server(InsertServerInput {
                    name: SEED_SERVER_NAME.to_string(),
                    description: Some(SEED_SERVER_DESCRIPTION.to_string()),
                    ..Default::default()
                })
                .await?
            }
        };

        let channel_count = self
            .store
            .count_documents(collections::CHANNEL, doc! { "server_id": server.id.as_str() })
            .await?;
        if channel_count == 0 {
            for name in SEED_CHANNEL_NAMES {
                self.create_channel(InsertChannelInput {
                    server_id: server.id.clone(),
                    name: name.to_string(),
                    kind: ChannelType::Text,
                    topic: Some(seed_channel_topic(name)),
                    is_private: false,
                })
                .await?;
            }
        }

        let channels = self.list_channels(&server.id).await?;

        if let Some(first) = channels.first() {
            let message_count = self
                .store
                .count_documents(collections::MESSAGE, doc! { "channel_id": first.id.as_str() })
                .await?;
            if message_count == 0 {
                for content in SEED_MESSAGES {
                    self.send_message(InsertMessageInput {
                        channel_id: first.id.clone(),
                        author_id: SEED_AUTHOR_ID.to_string(),
                        author_name: SEED_AUTHOR_NAME.to_string(),
                        content: content.to_string(),
                        ..Default::default()
                    })
                    .await?;
                }
            }
        }

        tracing::info!(
            server_id = %server.id,
            channels = channels.len(),
            "Seed data ensured"
        );
        Ok(SeedResult { server, channels })
    }
}
