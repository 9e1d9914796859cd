use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRoleDto {
    User,
    Shopkeeper,
    Admin,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct RequestOtpDto {
    pub mobile: String,
    /// Required when the mobile number is not registered yet.
    pub role: Option<String>,
    pub name: Option<String>,
    /// One-time bootstrap code, only needed to register the first admin.
    pub admin_code: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct VerifyOtpDto {
    pub mobile: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: Option<String>,
    pub mobile: String,
    pub role: UserRoleDto,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub message: String,
    pub user: UserDto,
}
