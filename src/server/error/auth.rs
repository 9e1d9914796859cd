use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is logged in but lacks the permission for the requested action.
    ///
    /// The message is logged only; clients receive a generic 403 body.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// OTP request without a mobile number.
    #[error("Mobile number is required")]
    MissingMobile,

    /// First OTP request for a mobile number without an acceptable role.
    #[error("Role is required for new users and must be either 'user' or 'shopkeeper'")]
    InvalidRole,

    /// Admin registration attempted without a valid bootstrap admin code.
    #[error("Invalid or expired admin code")]
    InvalidAdminCode,

    /// OTP does not match, has expired, or the mobile number is unknown.
    #[error("Invalid or expired OTP")]
    InvalidOtp,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with a generic message
/// - `MissingMobile` / `InvalidRole` / `InvalidAdminCode` / `InvalidOtp` → 400 Bad Request
///
/// Access denials are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired session")
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            Self::MissingMobile
            | Self::InvalidRole
            | Self::InvalidAdminCode
            | Self::InvalidOtp => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
