use crate::domain::{
    channel::entities::{Channel, InsertChannelInput},
    common::CoreError,
};

/// Channel operations exposed to the HTTP layer.
///
/// The parent server is referenced by id only; its existence is never checked.
pub trait ChannelService: Send + Sync {
    fn create_channel(
        &self,
        input: InsertChannelInput,
    ) -> impl Future<Output = Result<Channel, CoreError>> + Send;

    /// Lists the channels whose `server_id` equals `server_id`.
    fn list_channels(
        &self,
        server_id: &str,
    ) -> impl Future<Output = Result<Vec<Channel>, CoreError>> + Send;
}
