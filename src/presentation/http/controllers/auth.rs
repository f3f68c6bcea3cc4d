// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::auth::{LoginCommand, RegisterUserCommand, ResendOtpCommand, VerifyOtpCommand},
    dto::{AuthResponseDto, RegistrationDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Json, http::StatusCode};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub user_id: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    pub user_id: String,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<RegistrationDto>)> {
    let registration = state
        .services
        .auth_commands
        .register(RegisterUserCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(registration)))
}

pub async fn verify_otp(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> HttpResult<Json<AuthResponseDto>> {
    state
        .services
        .auth_commands
        .verify_otp(VerifyOtpCommand {
            user_id: payload.user_id,
            code: payload.code,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AuthResponseDto>> {
    state
        .services
        .auth_commands
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn resend_otp(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ResendOtpRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .auth_commands
        .resend_otp(ResendOtpCommand {
            user_id: payload.user_id,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "Verification code sent" })))
}
