use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pagination::PageDto,
        shop::{CreateShopDto, ShopDto, ShopResponseDto, UpdateShopDto},
    },
    server::{
        controller::param::{ShopListParams, ShopSearchParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::shop::ShopFilter,
        service::shop::ShopService,
        state::AppState,
        util::parse::parse_shop_type,
    },
};

/// Tag for grouping shop endpoints in OpenAPI documentation
pub static SHOP_TAG: &str = "shop";

/// Register a new shop.
///
/// The logged-in shopkeeper becomes the shop's owner.
///
/// # Access Control
/// - `Shopkeeper` - Only shopkeepers can register shops
///
/// # Returns
/// - `201 Created` - Shop created
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a shopkeeper
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/shop",
    tag = SHOP_TAG,
    request_body = CreateShopDto,
    responses(
        (status = 201, description = "Shop created successfully", body = ShopResponseDto),
        (status = 400, description = "Invalid shop data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a shopkeeper", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shop(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateShopDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Shopkeeper])
        .await?;

    let shop = ShopService::new(&state.db).create(&owner, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShopResponseDto {
            message: "Shop created successfully".to_string(),
            shop: shop.into_dto(),
        }),
    ))
}

/// List shops, optionally filtered by type and owner.
///
/// # Returns
/// - `200 OK` - Paginated shops
/// - `400 Bad Request` - Unknown shop type
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/v1/shop",
    tag = SHOP_TAG,
    params(ShopListParams),
    responses(
        (status = 200, description = "Paginated shops", body = PageDto<ShopDto>),
        (status = 400, description = "Unknown shop type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shops(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ShopListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let shop_type = match params.shop_type.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(parse_shop_type(value).ok_or_else(|| {
            AppError::BadRequest("Type must be one of: clinic, salon, parlor, other".to_string())
        })?),
    };
    let filter = ShopFilter {
        shop_type,
        owner_id: params.owner,
    };
    let pagination = params.pagination();

    let shops = ShopService::new(&state.db)
        .get_paginated(filter, pagination.page, pagination.limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(shops.map(|shop| shop.into_dto()))),
    ))
}

/// Search shops by name or type.
///
/// Matching is a case-insensitive substring match. No login is required.
///
/// # Returns
/// - `200 OK` - Matching shops, possibly empty
/// - `400 Bad Request` - Missing query
#[utoipa::path(
    get,
    path = "/api/v1/shop/search/query",
    tag = SHOP_TAG,
    params(ShopSearchParams),
    responses(
        (status = 200, description = "Matching shops", body = Vec<ShopDto>),
        (status = 400, description = "Search query is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_shops(
    State(state): State<AppState>,
    Query(params): Query<ShopSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let shops = ShopService::new(&state.db)
        .search(params.query.as_deref().unwrap_or_default())
        .await?;

    let shops: Vec<ShopDto> = shops.into_iter().map(|shop| shop.into_dto()).collect();

    Ok((StatusCode::OK, Json(shops)))
}

#[utoipa::path(
    get,
    path = "/api/v1/shop/{id}",
    tag = SHOP_TAG,
    params(
        ("id" = i32, Path, description = "Shop ID")
    ),
    responses(
        (status = 200, description = "The shop", body = ShopDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shop_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(shop_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let shop = ShopService::new(&state.db).get_by_id(shop_id).await?;

    Ok((StatusCode::OK, Json(shop.into_dto())))
}

/// Update a shop.
///
/// Only provided fields change. Opening and closing times are validated against
/// each other after the update is applied.
///
/// # Access Control
/// - `Shopkeeper` - Caller must be a shopkeeper
/// - `ManageShop` - Caller must own the shop
///
/// # Returns
/// - `200 OK` - Updated shop
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not the shop's owner
/// - `404 Not Found` - No shop with that ID
#[utoipa::path(
    put,
    path = "/api/v1/shop/{id}",
    tag = SHOP_TAG,
    params(
        ("id" = i32, Path, description = "Shop ID")
    ),
    request_body = UpdateShopDto,
    responses(
        (status = 200, description = "Shop updated successfully", body = ShopResponseDto),
        (status = 400, description = "Invalid shop data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the shop", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shop(
    State(state): State<AppState>,
    session: Session,
    Path(shop_id): Path<i32>,
    Json(payload): Json<UpdateShopDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Shopkeeper, Permission::ManageShop(shop_id)])
        .await?;

    let shop = ShopService::new(&state.db).update(shop_id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ShopResponseDto {
            message: "Shop updated successfully".to_string(),
            shop: shop.into_dto(),
        }),
    ))
}

/// Delete a shop and all of its appointments.
///
/// # Access Control
/// - `Admin` - Only admins can delete shops
///
/// # Returns
/// - `200 OK` - Shop deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No shop with that ID
#[utoipa::path(
    delete,
    path = "/api/v1/shop/{id}",
    tag = SHOP_TAG,
    params(
        ("id" = i32, Path, description = "Shop ID")
    ),
    responses(
        (status = 200, description = "Shop deleted successfully", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shop(
    State(state): State<AppState>,
    session: Session,
    Path(shop_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ShopService::new(&state.db).delete(shop_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Shop deleted successfully"))))
}

#[utoipa::path(
    get,
    path = "/api/v1/shop/owner/{owner_id}",
    tag = SHOP_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner's user ID")
    ),
    responses(
        (status = 200, description = "Shops owned by the user", body = Vec<ShopDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shops_by_owner(
    State(state): State<AppState>,
    session: Session,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let shops: Vec<ShopDto> = ShopService::new(&state.db)
        .get_by_owner(owner_id)
        .await?
        .into_iter()
        .map(|shop| shop.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(shops)))
}
