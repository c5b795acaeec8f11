use bcrypt::{hash, verify, DEFAULT_COST};
use crate::dtos::user::{RegisterAdminRequest, AdminResponse, LoginRequest, LoginResponse};
use crate::auth::jwt::sign_token;
use crate::error::{map_unique_violation, AppError};
use crate::models::admin::Admin;
use axum::{extract::State, Json};
use crate::state::AppState;
use crate::middleware::auth::AuthContext;
use axum::extract::Extension;
use tracing::{info, instrument, warn};

pub const MIN_PASSWORD_LEN: usize = 6;

#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn register_admin(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAdminRequest>
) -> Result<(axum::http::StatusCode, Json<AdminResponse>), AppError> {
    // Basic validation
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Name required"));
    }
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::validation("Valid email required"));
    }
    if payload.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation("Password too short"));
    }

    let password_hash = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Hash error: {e}")))?;

    let mut tx = state.db_pool.begin().await?;

    // The very first admin can always sign up; after that only when enabled.
    // The lock serialises concurrent first sign-ups until commit.
    if !state.config.allow_registration {
        sqlx::query("LOCK TABLE admins IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;
        let has_admin: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM admins)")
            .fetch_one(&mut *tx)
            .await?;
        if has_admin {
            return Err(AppError::forbidden("Registration is disabled"));
        }
    }

    let admin = sqlx::query_as::<_, Admin>(
        "INSERT INTO admins (name, email, password_hash)
         VALUES ($1, $2, $3)
         RETURNING id, name, email, password_hash, created_at"
    )
    .bind(payload.name.trim())
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| map_unique_violation(e, "Email already registered"))?;

    tx.commit().await?;

    info!(id = admin.id, "Admin registered");
    Ok((axum::http::StatusCode::CREATED, Json(AdminResponse::from(admin))))
}

#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn login_admin(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>
) -> Result<Json<LoginResponse>, AppError> {
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::validation("Email required"));
    }
    if payload.password.is_empty() {
        return Err(AppError::validation("Password required"));
    }

    let admin = sqlx::query_as::<_, Admin>(
        "SELECT id, name, email, password_hash, created_at FROM admins WHERE email = $1"
    )
    .bind(&email)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    let ok = verify(&payload.password, &admin.password_hash)
        .map_err(|e| AppError::internal(format!("Password verify error: {e}")))?;

    if !ok {
        warn!("Rejected login with wrong password");
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let ttl_hours = state.config.token_ttl_hours;
    let token = sign_token(admin.id, &admin.email, &admin.name, &state.config.jwt_secret, ttl_hours)?;

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in_seconds: ttl_hours * 60 * 60,
    }))
}

// Authenticated endpoint: returns the admin profile for the id in AuthContext
pub async fn get_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>
) -> Result<Json<AdminResponse>, AppError> {
    let admin = sqlx::query_as::<_, Admin>(
        "SELECT id, name, email, password_hash, created_at FROM admins WHERE id = $1"
    )
    .bind(auth.admin_id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Admin not found"))?;

    Ok(Json(AdminResponse::from(admin)))
}

#[cfg(test)]
mod tests {
    use crate::routes::tests::{post_json, send_to, state_with_pool};
    use axum::http::StatusCode;
    use sqlx::PgPool;

    #[sqlx::test]
    #[ignore] // needs DATABASE_URL pointing at Postgres: cargo test -- --ignored
    async fn concurrent_first_sign_ups_admit_exactly_one(pool: PgPool) {
        let state = state_with_pool(pool);
        let register = |email: &str| {
            post_json(
                "/api/auth/register",
                serde_json::json!({ "name": "Admin", "email": email, "password": "123456" }),
            )
        };

        let (first, second) = tokio::join!(
            send_to(state.clone(), register("first@shop.co")),
            send_to(state.clone(), register("second@shop.co")),
        );

        let mut statuses = vec![first.0, second.0];
        statuses.sort_by_key(|status| status.as_u16());
        assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::FORBIDDEN]);
    }
}
