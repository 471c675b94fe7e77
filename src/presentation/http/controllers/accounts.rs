// src/presentation/http/controllers/accounts.rs
use super::parse_id;
use crate::application::{
    commands::users::{LoginCommand, SignupCommand, ToggleFollowCommand, UpdateProfileCommand},
    dto::{AuthTokenDto, FollowToggleDto, UserDto, UserProfileDto},
    queries::users::GetProfileByUsernameQuery,
};
use crate::domain::user::Gender;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub password: String,
    /// Confirmation; must equal `password`.
    pub password2: String,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
pub async fn signup(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = SignupCommand {
        email: payload.email,
        username: payload.username,
        name: payload.name,
        birth_date: payload.birth_date,
        password: payload.password,
        password2: payload.password2,
        gender: payload.gender,
        bio: payload.bio,
        profile_image: payload.profile_image,
    };

    let user = state
        .services
        .user_commands
        .signup(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .user_commands
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts/logout",
    responses(
        (status = 200, description = "Session revoked", body = StatusResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Accounts"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .user_commands
        .logout(&user)
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "logged_out".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/accounts/profile",
    responses(
        (status = 200, description = "Own profile", body = UserProfileDto),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Accounts"
)]
pub async fn own_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_own_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/accounts/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Accounts"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateProfileCommand {
        username: payload.username,
        name: payload.name,
        birth_date: payload.birth_date,
        gender: payload.gender,
        bio: payload.bio,
        profile_image: payload.profile_image,
    };

    state
        .services
        .user_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account}",
    params(("account" = String, Path, description = "Username (nickname)")),
    responses(
        (status = 200, description = "Public profile", body = UserProfileDto),
        (status = 404, description = "Unknown user", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
pub async fn profile_by_username(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile_by_username(GetProfileByUsernameQuery { username })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts/{account}/follow",
    params(("account" = i64, Path, description = "Id of the user to follow or unfollow")),
    responses(
        (status = 200, description = "Follow toggled", body = FollowToggleDto),
        (status = 400, description = "Attempt to follow yourself", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Accounts"
)]
pub async fn toggle_follow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(account): Path<String>,
) -> HttpResult<Json<FollowToggleDto>> {
    let target_id = parse_id(&account, || "user not found".into())?;

    state
        .services
        .user_commands
        .toggle_follow(&user, ToggleFollowCommand { target_id })
        .await
        .into_http()
        .map(Json)
}
