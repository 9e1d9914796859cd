use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        appointment::{
            AppointmentDto, AppointmentResponseDto, AppointmentStatusDto, AppointmentUserDto,
            CreateAppointmentDto, UpdateAppointmentStatusDto,
        },
        shop::{CreateShopDto, ShopDto, ShopResponseDto, ShopTypeDto, UpdateShopDto},
        user::{LoginDto, RequestOtpDto, UserDto, UserRoleDto, VerifyOtpDto},
    },
    server::{
        controller::{appointment, index, shop, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        index::index,
        user::request_otp,
        user::verify_otp,
        user::logout,
        user::get_all_users,
        shop::create_shop,
        shop::get_shops,
        shop::search_shops,
        shop::get_shop_by_id,
        shop::update_shop,
        shop::delete_shop,
        shop::get_shops_by_owner,
        appointment::create_appointment,
        appointment::get_shop_appointments,
        appointment::update_appointment_status,
    ),
    components(
        schemas(
            ErrorDto,
            MessageDto,
            RequestOtpDto,
            VerifyOtpDto,
            LoginDto,
            UserDto,
            UserRoleDto,
            CreateShopDto,
            UpdateShopDto,
            ShopDto,
            ShopTypeDto,
            ShopResponseDto,
            CreateAppointmentDto,
            UpdateAppointmentStatusDto,
            AppointmentDto,
            AppointmentStatusDto,
            AppointmentUserDto,
            AppointmentResponseDto,
        )
    ),
    tags(
        (name = "index", description = "Health check"),
        (name = "user", description = "OTP login and user management"),
        (name = "shop", description = "Shop registration and lookup"),
        (name = "appointment", description = "Slot booking and status changes"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let api = Router::new()
        .route("/user/requestOtp", post(user::request_otp))
        .route("/user/verifyOtp", post(user::verify_otp))
        .route("/user/logout", post(user::logout))
        .route("/user/all", get(user::get_all_users))
        .route("/shop", post(shop::create_shop).get(shop::get_shops))
        .route("/shop/search/query", get(shop::search_shops))
        .route("/shop/owner/{owner_id}", get(shop::get_shops_by_owner))
        .route(
            "/shop/{id}",
            get(shop::get_shop_by_id)
                .put(shop::update_shop)
                .delete(shop::delete_shop),
        )
        .route("/appointment", post(appointment::create_appointment))
        .route("/appointment/{id}", get(appointment::get_shop_appointments))
        .route(
            "/appointment/{id}/status",
            patch(appointment::update_appointment_status),
        );

    Router::new()
        .route("/", get(index::index))
        .nest("/api/v1", api)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
