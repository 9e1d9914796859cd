//! User service for OTP login and user listing.
//!
//! This module provides the `UserService` for registering users on their first OTP
//! request, issuing and verifying OTPs, and listing users for admins. OTP delivery is
//! stubbed: issued codes are written to the log.

use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        page::Page,
        user::{CreateUserParam, RequestOtpParam, User},
    },
    service::{
        admin_code::AdminCodeService,
        otp::{generate_otp, OTP_TTL},
    },
    util::parse::parse_user_role,
};

/// Service providing business logic for user authentication and management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a fresh OTP for a mobile number, registering the user if needed.
    ///
    /// Unknown mobile numbers create a new unverified user with the requested role.
    /// The `user` and `shopkeeper` roles are open; `admin` additionally requires the
    /// bootstrap admin code, which is consumed on success. Existing users keep their
    /// role and any submitted role, name or admin code is ignored.
    ///
    /// # Arguments
    /// - `param` - Mobile number plus registration fields for new users
    /// - `admin_codes` - Holder of the bootstrap admin code
    ///
    /// # Returns
    /// - `Ok(User)` - The user the OTP was issued to
    /// - `Err(AuthError::MissingMobile)` - Empty mobile number
    /// - `Err(AuthError::InvalidRole)` - New user without an acceptable role
    /// - `Err(AuthError::InvalidAdminCode)` - Admin registration without a valid code
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn request_otp(
        &self,
        param: RequestOtpParam,
        admin_codes: &AdminCodeService,
    ) -> Result<User, AppError> {
        let mobile = param.mobile.trim().to_string();
        if mobile.is_empty() {
            return Err(AuthError::MissingMobile.into());
        }

        let user_repo = UserRepository::new(self.db);

        let user = match user_repo.find_by_mobile(&mobile).await? {
            Some(user) => user,
            None => {
                let role = match param.role.as_deref().map(str::trim).and_then(parse_user_role) {
                    Some(UserRole::Admin) => {
                        let code = param.admin_code.as_deref().unwrap_or_default();
                        if !admin_codes.validate_and_consume(code).await {
                            return Err(AuthError::InvalidAdminCode.into());
                        }
                        UserRole::Admin
                    }
                    Some(role) => role,
                    None => return Err(AuthError::InvalidRole.into()),
                };

                let name = param
                    .name
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty());

                let user = user_repo
                    .create(CreateUserParam {
                        mobile: mobile.clone(),
                        name,
                        role,
                    })
                    .await?;

                tracing::info!("Registered user {} with role {:?}", user.id, user.role);

                user
            }
        };

        let otp = generate_otp();
        user_repo
            .set_otp(user.id, otp.clone(), Utc::now() + OTP_TTL)
            .await?;

        tracing::info!("OTP for {}: {}", mobile, otp);

        Ok(user)
    }

    /// Verifies an OTP and marks the user verified.
    ///
    /// The OTP is cleared on success so it cannot be replayed.
    ///
    /// # Returns
    /// - `Ok(User)` - OTP accepted, user is now verified
    /// - `Err(AuthError::InvalidOtp)` - Unknown mobile, wrong code, or expired code
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn verify_otp(&self, mobile: &str, otp: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_mobile(mobile.trim()).await? else {
            return Err(AuthError::InvalidOtp.into());
        };

        if !credentials.accepts(otp.trim(), Utc::now()) {
            return Err(AuthError::InvalidOtp.into());
        }

        user_repo.mark_verified(credentials.user.id).await?;

        let mut user = credentials.user;
        user.is_verified = true;

        Ok(user)
    }

    /// Retrieves all users with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - One-indexed page number
    /// - `per_page` - Users per page
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<Page<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_all_paginated(page, per_page).await?)
    }
}
