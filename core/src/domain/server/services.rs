use bson::Document;

use crate::domain::{
    common::{CoreError, services::Service},
    document::{collections, ports::DocumentStore, serialization::encode_document},
    server::{
        entities::{InsertServerInput, Server},
        ports::ServerService,
    },
};

impl<D> ServerService for Service<D>
where
    D: DocumentStore,
{
    async fn create_server(&self, input: InsertServerInput) -> Result<Server, CoreError> {
        let data = encode_document(&input)?;
        let server: Server = self.create_and_fetch(collections::SERVER, data).await?;

        tracing::info!(server_id = %server.id, name = %server.name, "Server created");
        Ok(server)
    }

    async fn list_servers(&self) -> Result<Vec<Server>, CoreError> {
        self.fetch_all(collections::SERVER, Document::new()).await
    }
}
