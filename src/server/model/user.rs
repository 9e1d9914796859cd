//! User domain models and parameters.
//!
//! Provides the domain model for application users identified by their mobile number,
//! along with the parameter types used during OTP login.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{UserDto, UserRoleDto};

/// Registered user with their role and verification state.
///
/// Never carries OTP material; see [`UserCredentials`] for that.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub mobile: String,
    pub role: UserRole,
    /// Whether the user has completed at least one OTP login.
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            mobile: entity.mobile,
            role: entity.role,
            is_verified: entity.is_verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            mobile: self.mobile,
            role: self.role.into(),
            is_verified: self.is_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_shopkeeper(&self) -> bool {
        self.role == UserRole::Shopkeeper
    }
}

impl From<UserRole> for UserRoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => Self::User,
            UserRole::Shopkeeper => Self::Shopkeeper,
            UserRole::Admin => Self::Admin,
        }
    }
}

/// A user together with their pending OTP, if any.
///
/// Only loaded while verifying a login attempt.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub otp: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let otp = entity.otp.clone();
        let otp_expires_at = entity.otp_expires_at;

        Self {
            user: User::from_entity(entity),
            otp,
            otp_expires_at,
        }
    }

    /// Checks a submitted OTP against the stored one and its expiry.
    ///
    /// # Returns
    /// - `true` - Codes match and `now` is not past the expiry
    /// - `false` - No OTP pending, mismatch, or expired
    pub fn accepts(&self, submitted: &str, now: DateTime<Utc>) -> bool {
        match (&self.otp, self.otp_expires_at) {
            (Some(otp), Some(expires_at)) => otp == submitted && now <= expires_at,
            _ => false,
        }
    }
}

/// Parameters for registering a new user on their first OTP request.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub mobile: String,
    pub name: Option<String>,
    pub role: UserRole,
}

/// Parameters for requesting a login OTP.
///
/// `role`, `name` and `admin_code` are only consulted when the mobile number is not
/// registered yet.
#[derive(Debug, Clone, Default)]
pub struct RequestOtpParam {
    pub mobile: String,
    pub name: Option<String>,
    /// Raw role string as submitted; validated only for new users.
    pub role: Option<String>,
    pub admin_code: Option<String>,
}
