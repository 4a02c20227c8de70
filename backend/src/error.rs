use rocket::http::Status;
use rocket::response::Responder;
use shared::VoteError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid index")]
    InvalidIndex(#[from] VoteError),
    #[error("invalid index")]
    MissingIndex,
    #[error("failed to render page")]
    Render,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = match self {
            ApiError::InvalidIndex(_) => Status::BadRequest,
            ApiError::MissingIndex => Status::BadRequest,
            ApiError::Render => Status::InternalServerError,
            ApiError::Internal(_) => Status::InternalServerError,
        };

        rocket::Response::build_from(self.to_string().respond_to(req)?)
            .status(status)
            .ok()
    }
}

/// Anything that stops the server from starting or stopping cleanly.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("server failed: {0}")]
    Server(String),
    #[error("server did not shut down within {0:?}")]
    ShutdownTimeout(std::time::Duration),
}

impl From<rocket::Error> for BackendError {
    fn from(e: rocket::Error) -> Self {
        BackendError::Server(e.to_string())
    }
}
