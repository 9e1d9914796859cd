use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AppointmentDto, AppointmentResponseDto, CreateAppointmentDto,
            UpdateAppointmentStatusDto,
        },
        pagination::PageDto,
    },
    server::{
        controller::param::AppointmentListParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

/// Book an appointment slot.
///
/// The booking is created as `pending` for the logged-in user. It is rejected if a
/// confirmed appointment already holds the same shop, date and time slot.
///
/// # Returns
/// - `201 Created` - Appointment booked
/// - `400 Bad Request` - Missing shop, malformed date or time slot
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Shop does not exist
/// - `409 Conflict` - Slot already booked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/appointment",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment booked successfully", body = AppointmentResponseDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 409, description = "Time slot already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let appointment = AppointmentService::new(&state.db, state.clock.as_ref())
        .create(&user, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AppointmentResponseDto {
            message: "Appointment booked successfully".to_string(),
            appointment: appointment.into_dto(),
        }),
    ))
}

/// List a shop's appointments.
///
/// Sorted by date then time slot. Each entry includes the booking user's name and
/// mobile number.
///
/// # Access Control
/// - `ManageShop` - Caller must own the shop or be an admin
///
/// # Returns
/// - `200 OK` - Paginated appointments
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not the shop's owner
/// - `404 Not Found` - Shop does not exist
#[utoipa::path(
    get,
    path = "/api/v1/appointment/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Shop ID"),
        AppointmentListParams
    ),
    responses(
        (status = 200, description = "Paginated appointments", body = PageDto<AppointmentDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the shop", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shop_appointments(
    State(state): State<AppState>,
    session: Session,
    Path(shop_id): Path<i32>,
    Query(params): Query<AppointmentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageShop(shop_id)])
        .await?;

    let pagination = params.pagination();
    let status = params
        .status
        .as_deref()
        .map(str::trim)
        .filter(|status| !status.is_empty());

    let appointments = AppointmentService::new(&state.db, state.clock.as_ref())
        .list_by_shop(shop_id, status, pagination.page, pagination.limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(
            appointments.map(|appointment| appointment.into_dto()),
        )),
    ))
}

/// Change an appointment's status.
///
/// Appointments whose start time has passed cannot be changed. Confirming re-checks
/// that no other confirmed appointment holds the slot.
///
/// # Access Control
/// The booking user, the shop's owner, or an admin.
///
/// # Returns
/// - `200 OK` - Updated appointment
/// - `400 Bad Request` - Unknown status, past appointment, or status locked
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller may not change this appointment
/// - `404 Not Found` - No appointment with that ID
/// - `409 Conflict` - Confirming would double-book the slot
#[utoipa::path(
    patch,
    path = "/api/v1/appointment/{id}/status",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentStatusDto,
    responses(
        (status = 200, description = "Appointment status updated", body = AppointmentResponseDto),
        (status = 400, description = "Transition rejected", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not change this appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 409, description = "Time slot already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    session: Session,
    Path(appointment_id): Path<i32>,
    Json(payload): Json<UpdateAppointmentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let appointment = AppointmentService::new(&state.db, state.clock.as_ref())
        .transition(&actor, appointment_id, &payload.status)
        .await?;

    let appointment = appointment.into_dto();

    Ok((
        StatusCode::OK,
        Json(AppointmentResponseDto {
            message: format!("Appointment {} successfully", appointment.status.as_str()),
            appointment,
        }),
    ))
}
