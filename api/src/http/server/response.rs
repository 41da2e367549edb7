use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// JSON body paired with the status code it is sent with.
pub struct Response<T: Serialize> {
    status: StatusCode,
    data: T,
}

impl<T: Serialize> Response<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.data)).into_response()
    }
}
