use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("{}", _0)]
    NotFound(&'static str),
    #[display("{}", _0)]
    BadRequest(String),
    #[display("{}", _0)]
    Validation(String),
    #[display("data store is not configured")]
    Unavailable,
    #[display("{}", _0)]
    Internal(String),
}

#[derive(Serialize)]
struct ErrBody {
    detail: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            detail: self.to_string(),
        })
    }
}

impl From<RepoErr> for ApiError {
    fn from(err: RepoErr) -> Self {
        match err {
            RepoErr::Unavailable => Self::Unavailable,
            other => Self::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepoErr {
    #[error("data store is not configured")]
    Unavailable,
    #[error("store request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected store response: {0}")]
    Decode(String),
}
