use crate::domain::{
    common::CoreError,
    server::entities::{InsertServerInput, Server},
};

/// Server operations exposed to the HTTP layer.
pub trait ServerService: Send + Sync {
    /// Stores `input` and returns the stored server read back from the store.
    ///
    /// # Returns
    ///
    /// - `Ok(Server)` - The newly created server with its assigned `id`
    /// - `Err(CoreError)` - The store rejected the write or read-back
    fn create_server(
        &self,
        input: InsertServerInput,
    ) -> impl Future<Output = Result<Server, CoreError>> + Send;

    /// Lists every stored server in the store's natural order.
    fn list_servers(&self) -> impl Future<Output = Result<Vec<Server>, CoreError>> + Send;
}
