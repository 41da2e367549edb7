use bson::{doc, oid::ObjectId};

use crate::domain::{
    common::{CoreError, services::Service},
    document::{
        CREATED_AT_FIELD, ID_FIELD, STORE_ID_FIELD, collections,
        ports::{DocumentStore, FindSpec},
        serialization::encode_document,
    },
    message::{
        entities::{InsertMessageInput, Message},
        ports::MessageService,
    },
};

impl<D> MessageService for Service<D>
where
    D: DocumentStore,
{
    async fn send_message(&self, input: InsertMessageInput) -> Result<Message, CoreError> {
        // Channel ids may be ObjectId hex or a plain string stored under `id`.
        let lookup = match ObjectId::parse_str(&input.channel_id) {
            Ok(oid) => doc! { STORE_ID_FIELD: oid },
            Err(_) => doc! { ID_FIELD: input.channel_id.as_str() },
        };
        let _ = self.store.find_document(collections::CHANNEL, lookup).await;

        let data = encode_document(&input)?;
        let message: Message = self.create_and_fetch(collections::MESSAGE, data).await?;

        tracing::debug!(
            message_id = %message.id,
            channel_id = %message.channel_id,
            "Message stored"
        );
        Ok(message)
    }

    async fn list_messages(&self, channel_id: &str, limit: u32) -> Result<Vec<Message>, CoreError> {
        let spec = FindSpec::sorted_by(CREATED_AT_FIELD).with_limit(u64::from(limit));
        self.fetch_sorted(collections::MESSAGE, doc! { "channel_id": channel_id }, spec)
            .await
    }
}
