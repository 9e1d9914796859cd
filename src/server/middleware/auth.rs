use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{shop::ShopRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Requirements a logged-in user must meet for a request.
pub enum Permission {
    /// User role is `admin`.
    Admin,
    /// User role is `shopkeeper`.
    Shopkeeper,
    /// User owns the shop with this ID, or is an admin.
    ManageShop(i32),
}

/// Resolves the session's user and checks their permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user if they satisfy every permission.
    ///
    /// An empty slice only requires a valid session.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user meeting all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    /// - `Err(AppError::NotFound)` - `ManageShop` names a shop that does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Shopkeeper => {
                    if !user.is_shopkeeper() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a shopkeeper action without the shopkeeper role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::ManageShop(shop_id) => {
                    let Some(shop) = ShopRepository::new(self.db).find_by_id(*shop_id).await?
                    else {
                        return Err(AppError::NotFound("Shop not found".to_string()));
                    };

                    if !user.is_admin() && shop.owner_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User does not own shop {}", shop_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
