use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShopTypeDto {
    Clinic,
    Salon,
    Parlor,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct CreateShopDto {
    pub name: String,
    pub contact: String,
    #[serde(rename = "type")]
    pub shop_type: String,
    pub address: String,
    /// Format: "HH:MM"
    pub opening_time: String,
    /// Format: "HH:MM"
    pub closing_time: String,
    /// Minutes per slot, defaults to 30.
    pub slot_duration: Option<i32>,
}

/// Partial shop update, absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UpdateShopDto {
    pub name: Option<String>,
    pub contact: Option<String>,
    #[serde(rename = "type")]
    pub shop_type: Option<String>,
    pub address: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub slot_duration: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ShopDto {
    pub id: i32,
    pub name: String,
    pub contact: String,
    #[serde(rename = "type")]
    pub shop_type: ShopTypeDto,
    pub address: String,
    pub owner_id: i32,
    pub owner_name: Option<String>,
    pub opening_time: String,
    pub closing_time: String,
    pub slot_duration: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ShopResponseDto {
    pub message: String,
    pub shop: ShopDto,
}
