use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::DetailBody;
use crate::store::DirectoryError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Directory(DirectoryError::ActivityNotFound)
            | ApiError::Directory(DirectoryError::ParticipantNotFound) => StatusCode::NOT_FOUND,
            ApiError::Directory(DirectoryError::AlreadySignedUp) => StatusCode::BAD_REQUEST,
            ApiError::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Path(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
        };

        (
            status,
            Json(DetailBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
