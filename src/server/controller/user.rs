use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pagination::PageDto,
        user::{LoginDto, RequestOtpDto, UserDto, VerifyOtpDto},
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::user::RequestOtpParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Request a login OTP for a mobile number.
///
/// Registers the user on their first request. New users must pass `role` as `user` or
/// `shopkeeper`; `admin` additionally requires the bootstrap `admin_code` logged at
/// startup. The OTP is valid for 5 minutes.
///
/// # Returns
/// - `200 OK` - OTP issued
/// - `400 Bad Request` - Missing mobile, invalid role, or invalid admin code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/user/requestOtp",
    tag = USER_TAG,
    request_body = RequestOtpDto,
    responses(
        (status = 200, description = "OTP sent", body = MessageDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_otp(
    State(state): State<AppState>,
    Json(payload): Json<RequestOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RequestOtpParam {
        mobile: payload.mobile,
        name: payload.name,
        role: payload.role,
        admin_code: payload.admin_code,
    };

    UserService::new(&state.db)
        .request_otp(param, &state.admin_code_service)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("OTP sent"))))
}

/// Verify an OTP and start a session.
///
/// On success the session ID is rotated and the user is logged in.
///
/// # Returns
/// - `200 OK` - Logged in, returns the user
/// - `400 Bad Request` - Invalid or expired OTP
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/v1/user/verifyOtp",
    tag = USER_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Login successful", body = LoginDto),
        (status = 400, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .verify_otp(&payload.mobile, &payload.otp)
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(LoginDto {
            message: "Login successful".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log out and clear the session.
///
/// # Returns
/// - `200 OK` - Logged out
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/v1/user/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged out successfully", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out successfully"))))
}

/// List all users, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Paginated users
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/v1/user/all",
    tag = USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated users", body = PageDto<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let pagination = params.pagination();
    let users = UserService::new(&state.db)
        .get_all_users(pagination.page, pagination.limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(users.map(|user| user.into_dto()))),
    ))
}
