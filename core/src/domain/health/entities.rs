use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::CoreError;

/// Longest error summary the diagnostic report carries.
pub const DIAGNOSTIC_ERROR_LIMIT: usize = 50;
/// Number of collection names the diagnostic report lists.
pub const DIAGNOSTIC_COLLECTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsHealthy(pub bool);

impl IsHealthy {
    pub fn to_result(self) -> Result<IsHealthy, CoreError> {
        if self.0 {
            Ok(self)
        } else {
            Err(CoreError::Unhealthy)
        }
    }
}

/// Best-effort view of the document store's state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct StoreDiagnostics {
    pub database: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub fn truncate_error(err: &impl std::fmt::Display) -> String {
    err.to_string().chars().take(DIAGNOSTIC_ERROR_LIMIT).collect()
}
