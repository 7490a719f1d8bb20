use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            AuthResponseDto, LoginDto, ProfileDto, RegisterDto, RoleUpdatedDto,
            UpdateProfileDto, UpdateRoleDto, UsersDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{LoginParam, RegisterParam, UpdateProfileParam},
        service::auth::{AuthService, AuthSession},
        state::AppState,
        util::extract::{Json, Path},
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn session_response(
    state: &AppState,
    jar: CookieJar,
    session: AuthSession,
) -> (CookieJar, Json<AuthResponseDto>) {
    let jar = jar.add(state.cookies.token_cookie(session.token.clone()));

    (
        jar,
        Json(AuthResponseDto {
            token: session.token,
            user: session.user.into_dto(),
        }),
    )
}

/// Register a new account.
///
/// Creates the account, signs a token and sets it as the `token` cookie. The admin role
/// can only be requested while no admin exists.
///
/// # Returns
/// - `201 Created` - Account created, token in body and cookie
/// - `400 Bad Request` - Invalid fields, email taken or admin already exists
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let session = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, session_response(&state, jar, session)))
}

/// Sign in with email and password.
///
/// When `role` is given the account must hold exactly that role.
///
/// # Returns
/// - `200 OK` - Signed in, token in body and cookie
/// - `400 Bad Request` - Invalid fields
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account lacks the requested role
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AuthResponseDto),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account does not have the requested role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let session = AuthService::new(&state.db, &state.tokens)
        .login(LoginParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, session_response(&state, jar, session)))
}

/// Sign out by clearing the token cookie.
///
/// Tokens are stateless, so an already copied token stays valid until it expires.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Cookie cleared", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let jar = jar.add(state.cookies.cleared_cookie());

    Ok((
        StatusCode::OK,
        jar,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Get the signed-in user's profile.
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProfileDto {
            user: user.into_dto(),
        }),
    ))
}

/// Update the signed-in user's profile.
///
/// Only provided fields change. A fresh token is issued and set as the cookie.
///
/// # Returns
/// - `200 OK` - Updated user with a new token
/// - `400 Bad Request` - Invalid fields or email used by another account
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = AuthResponseDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    payload.validate()?;

    let session = AuthService::new(&state.db, &state.tokens)
        .update_profile(&user, UpdateProfileParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, session_response(&state, jar, session)))
}

/// List all users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/auth/users",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "All users", body = UsersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = AuthService::new(&state.db, &state.tokens)
        .list_users()
        .await?;

    Ok((
        StatusCode::OK,
        Json(UsersDto {
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Change a user's role.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - Role updated
/// - `400 Bad Request` - Role is not `user` or `admin`
/// - `404 Not Found` - No such user
#[utoipa::path(
    patch,
    path = "/api/auth/users/{user_id}/role",
    tag = AUTH_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = RoleUpdatedDto),
        (status = 400, description = "Invalid role", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = AuthService::new(&state.db, &state.tokens)
        .update_role(user_id, &payload.role)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RoleUpdatedDto {
            message: "Role updated".to_string(),
            user: user.into_dto(),
        }),
    ))
}
