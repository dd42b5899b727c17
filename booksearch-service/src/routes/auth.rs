use crate::error::AppError;
use crate::models::requests::{LoginRequest, RegisterRequest};
use crate::models::responses::{RegisterResponse, TokenResponse};
use crate::models::storage::NewUser;
use crate::services::auth::{hash_password, verify_password};
use crate::state::AppState;
use crate::utils::text::{is_valid_email, normalize_email};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{info, warn};

const MAX_EMAIL_LEN: usize = 100;
const MAX_USERNAME_LEN: usize = 50;
const MIN_PASSWORD_LEN: usize = 6;

fn validate_registration(request: &RegisterRequest) -> Result<(String, String), AppError> {
    let email = normalize_email(&request.email);
    let username = request.username.trim().to_string();

    if email.len() > MAX_EMAIL_LEN || !is_valid_email(&email) {
        return Err(AppError::InvalidRequest(
            "A valid email address is required.".to_string(),
        ));
    }
    if username.is_empty() || username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::InvalidRequest(format!(
            "Username must be between 1 and {} characters.",
            MAX_USERNAME_LEN
        )));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::InvalidRequest(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        )));
    }

    Ok((email, username))
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let (email, username) = validate_registration(&request)?;

    // hashing blocks, keep it off the async workers
    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let user = state
        .users
        .create_user(NewUser {
            username,
            email,
            password_hash,
        })
        .await?;

    info!("Registered user {} ({})", user.user_id, user.username);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let email = normalize_email(&request.email);

    let Some(user) = state.users.find_by_email(&email).await? else {
        warn!("Login attempt for unknown email");
        return Err(AppError::Unauthorized);
    };

    let password = request.password;
    let password_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        warn!("Wrong password for user {}", user.user_id);
        return Err(AppError::Unauthorized);
    }

    let token = state.tokens.issue(&user)?;
    info!("Issued token for user {}", user.user_id);

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn registration_is_normalized() {
        let (email, username) =
            validate_registration(&request(" Paul@Arrakis.test ", " paul ", "secret1")).unwrap();
        assert_eq!(email, "paul@arrakis.test");
        assert_eq!(username, "paul");
    }

    #[test]
    fn registration_rejects_bad_input() {
        let long_name = "x".repeat(MAX_USERNAME_LEN + 1);
        let long_email = format!("{}@arrakis.test", "x".repeat(MAX_EMAIL_LEN));

        for bad in [
            request("not-an-email", "paul", "secret1"),
            request(&long_email, "paul", "secret1"),
            request("paul@arrakis.test", "   ", "secret1"),
            request("paul@arrakis.test", &long_name, "secret1"),
            request("paul@arrakis.test", "paul", "short"),
        ] {
            assert!(matches!(
                validate_registration(&bad),
                Err(AppError::InvalidRequest(_))
            ));
        }
    }
}
