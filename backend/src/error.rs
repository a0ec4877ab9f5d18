use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorResponse, PollError, ValidationError};
use thiserror::Error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Poll not found")]
    NotFound,
    #[error(transparent)]
    InvalidPoll(#[from] ValidationError),
    #[error(transparent)]
    InvalidOption(#[from] PollError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound => Status::NotFound,
            ApiError::InvalidPoll(_) => Status::BadRequest,
            ApiError::InvalidOption(_) => Status::BadRequest,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.to_string()))).respond_to(req)
    }
}
