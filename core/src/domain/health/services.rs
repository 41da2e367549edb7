use crate::domain::{
    common::{CoreError, services::Service},
    document::ports::DocumentStore,
    health::{
        entities::{DIAGNOSTIC_COLLECTION_LIMIT, IsHealthy, StoreDiagnostics, truncate_error},
        ports::HealthService,
    },
};

impl<D> HealthService for Service<D>
where
    D: DocumentStore,
{
    async fn check_health(&self) -> Result<IsHealthy, CoreError> {
        let healthy = match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Document store ping failed");
                false
            }
        };
        IsHealthy(healthy).to_result()
    }

    async fn diagnose(&self) -> StoreDiagnostics {
        if self.store.database_name().is_none() {
            return StoreDiagnostics {
                database: "⚠️  Available but not initialized".to_string(),
                connection_status: "Not Connected".to_string(),
                collections: Vec::new(),
            };
        }

        let mut diagnostics = StoreDiagnostics {
            database: "✅ Available".to_string(),
            connection_status: "Connected".to_string(),
            collections: Vec::new(),
        };

        match self.store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(DIAGNOSTIC_COLLECTION_LIMIT);
                diagnostics.collections = names;
                diagnostics.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                diagnostics.database = format!("⚠️  Connected but Error: {}", truncate_error(&e));
            }
        }

        diagnostics
    }
}
