use crate::domain::{common::CoreError, seed::entities::SeedResult};

pub trait SeedService: Send + Sync {
    /// Ensures a server, its default channels, and welcome messages in the
    /// first channel exist. Each step only writes when its data is absent, so
    /// sequential calls after the first are no-ops.
    ///
    /// Which server and channel count as "first" follows the store's natural
    /// order. Concurrent callers can race and both create a server.
    fn seed(&self) -> impl Future<Output = Result<SeedResult, CoreError>> + Send;
}
