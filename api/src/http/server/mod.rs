pub mod app_state;
pub mod error;
pub mod extractors;
pub mod response;

pub use app_state::AppState;
pub use error::ApiError;
pub use response::Response;
