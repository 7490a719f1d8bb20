//! Account registration, login and profile management.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{
        parse_role, role_name, CreateUserParam, LoginParam, RegisterParam, UpdateProfileParam,
        User, UserChanges,
    },
    service::{
        password::{hash_password, verify_password},
        token::TokenService,
    },
};

/// A user together with a freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Creates an account and signs a token for it.
    ///
    /// Only one admin may self-register; once any admin exists, further admin
    /// registrations are refused.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created user and token
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    /// - `Err(AuthError::AdminExists)` - Admin requested while an admin exists
    /// - `Err(AppError)` - Hashing, signing or database failure
    pub async fn register(&self, param: RegisterParam) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        if param.role == UserRole::Admin && user_repo.admin_exists().await? {
            return Err(AuthError::AdminExists.into());
        }

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash: hash_password(&param.password)?,
                role: param.role,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        self.session_for(user)
    }

    /// Checks credentials and signs a token.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Authenticated user and token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::RoleMismatch)` - Requested role differs from the account's
    pub async fn login(&self, param: LoginParam) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if let Some(role) = param.role {
            if role != user.role {
                return Err(AuthError::RoleMismatch(role_name(role).to_string()).into());
            }
        }

        self.session_for(user)
    }

    /// Applies profile changes for the signed-in user and re-issues the token.
    ///
    /// A new password is hashed before storage. An email already held by another
    /// account is rejected.
    pub async fn update_profile(
        &self,
        user: &User,
        param: UpdateProfileParam,
    ) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &param.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(AuthError::EmailTaken.into());
                }
            }
        }

        let password_hash = param
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let updated = user_repo
            .update(
                user.id,
                UserChanges {
                    name: param.name,
                    email: param.email,
                    password_hash,
                    avatar_url: param.avatar_url,
                    phone: param.phone,
                },
            )
            .await?;

        self.session_for(updated)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_all().await?)
    }

    /// Sets a user's role from its wire name.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Role is not `user` or `admin`
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn update_role(&self, user_id: i32, role: &str) -> Result<User, AppError> {
        let Some(role) = parse_role(role) else {
            return Err(AppError::BadRequest("Invalid role".to_string()));
        };

        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .set_role(user_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("User {} role set to {:?}", user.id, user.role);

        Ok(user)
    }

    fn session_for(&self, user: User) -> Result<AuthSession, AppError> {
        let token = self.tokens.issue(user.id, user.role)?;

        Ok(AuthSession { token, user })
    }
}
