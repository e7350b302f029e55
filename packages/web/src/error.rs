//! Mapping marketplace errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use market_api::Error;

/// Error returned by page handlers.
///
/// A missing or wrong-role session sends the browser to the login page. Other user
/// errors that reach this point are answered with their message; internal errors are
/// logged and hidden behind a generic 500.
#[derive(Debug)]
pub struct AppError(pub Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

/// HTTP status for a marketplace error in a JSON response.
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::NotLoggedIn | Error::Forbidden => StatusCode::FORBIDDEN,
        Error::ProductNotFound | Error::OrderNotFound | Error::NoRecentOrder => {
            StatusCode::NOT_FOUND
        }
        e if e.is_user_facing() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NotLoggedIn | Error::Forbidden => Redirect::to("/login").into_response(),
            ref e if e.is_user_facing() => (status_for(e), e.to_string()).into_response(),
            e => {
                tracing::error!(error = %e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
