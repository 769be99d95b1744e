use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rendezvous_directory::error::DirectoryError;
use rendezvous_optimizer::{error::OptimizeError, json::types::RequestError};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<DirectoryError> for ApiError {
    fn from(error: DirectoryError) -> Self {
        let message = error.to_string();
        match error {
            DirectoryError::SubregionNotFound { .. } => ApiError::NotFound(message),
            DirectoryError::Request(_) | DirectoryError::Api { .. } | DirectoryError::Malformed(_) => {
                ApiError::BadGateway(message)
            }
        }
    }
}

impl From<OptimizeError> for ApiError {
    fn from(error: OptimizeError) -> Self {
        let message = error.to_string();
        match error {
            OptimizeError::NoVenues => ApiError::NotFound(message),
            OptimizeError::UnknownTravelMode(_) | OptimizeError::MeetingTime(_) => {
                ApiError::BadRequest(message)
            }
            OptimizeError::Provider(_) | OptimizeError::ShapeMismatch { .. } => {
                ApiError::BadGateway(message)
            }
            OptimizeError::PointCountMismatch { .. } | OptimizeError::InvalidBatchSize => {
                ApiError::InternalServerError(message)
            }
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(error: RequestError) -> Self {
        match error {
            RequestError::Directory(error) => error.into(),
            RequestError::Optimize(error) => error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::InternalServerError(message) | ApiError::BadGateway(message) => {
                error!("{}", message);
                (status, message).into_response()
            }
            ApiError::BadRequest(message) | ApiError::NotFound(message) => {
                (status, message).into_response()
            }
        }
    }
}
