use crate::domain::{
    common::CoreError,
    health::entities::{IsHealthy, StoreDiagnostics},
};

pub trait HealthService: Send + Sync {
    fn check_health(&self) -> impl Future<Output = Result<IsHealthy, CoreError>> + Send;

    /// Inspects the store without ever failing. Errors are summarised in the
    /// returned report, truncated to a short string.
    fn diagnose(&self) -> impl Future<Output = StoreDiagnostics> + Send;
}
