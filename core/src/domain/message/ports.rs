use crate::domain::{
    common::CoreError,
    message::entities::{InsertMessageInput, Message},
};

/// Message operations exposed to the HTTP layer.
pub trait MessageService: Send + Sync {
    /// Stores a message in `input.channel_id`.
    ///
    /// The channel is looked up first, but the lookup is advisory: a missing
    /// channel or a failed read does not prevent the send.
    fn send_message(
        &self,
        input: InsertMessageInput,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    /// Lists up to `limit` messages of a channel, oldest first.
    fn list_messages(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Message>, CoreError>> + Send;
}
