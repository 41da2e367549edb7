use bson::doc;

use crate::domain::{
    channel::{
        entities::{Channel, InsertChannelInput},
        ports::ChannelService,
    },
    common::{CoreError, services::Service},
    document::{collections, ports::DocumentStore, serialization::encode_document},
};

impl<D> ChannelService for Service<D>
where
    D: DocumentStore,
{
    async fn create_channel(&self, input: InsertChannelInput) -> Result<Channel, CoreError> {
        let data = encode_document(&input)?;
        let channel: Channel = self.create_and_fetch(collections::CHANNEL, data).await?;

        tracing::info!(
            channel_id = %channel.id,
            server_id = %channel.server_id,
            "Channel created"
        );
        Ok(channel)
    }

    async fn list_channels(&self, server_id: &str) -> Result<Vec<Channel>, CoreError> {
        self.fetch_all(collections::CHANNEL, doc! { "server_id": server_id })
            .await
    }
}
